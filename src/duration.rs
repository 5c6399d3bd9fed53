/// Format a second count as a compact days/hours:minutes:seconds string.
///
/// Higher units are dropped while they are zero, and a bare second count
/// gets an `s` suffix: `dhms(42)` is `"42s"`, `dhms(125)` is `"2:05"`,
/// `dhms(359999)` is `"4d 03:59:59"`.
///
/// Each unit's branch also emits the pad digit for the unit that follows,
/// and that pad is kept even when the following unit turns out to be zero
/// and is dropped: `dhms(86400)` is `"1d 00"`, not `"1d"`. Callers clamp
/// sentinel values to zero before formatting.
pub fn dhms(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds / 3600) % 24;
    let minutes = (seconds / 60) % 60;
    let leftovers = seconds % 60;

    let mut output = String::new();
    if days != 0 {
        output.push_str(&format!("{}d ", days));
        if hours < 10 {
            output.push('0');
        }
    }

    if hours != 0 {
        output.push_str(&format!("{}:", hours));
        if minutes < 10 {
            output.push('0');
        }
    }

    if minutes != 0 {
        output.push_str(&format!("{}:", minutes));
        if leftovers < 10 {
            output.push('0');
        }
    }

    output.push_str(&leftovers.to_string());

    if days == 0 && hours == 0 && minutes == 0 {
        output.push('s');
    }
    output
}
