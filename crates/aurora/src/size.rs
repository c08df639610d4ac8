//! Human readable file sizes.

const UNITS: [&str; 4] = ["B", "K", "M", "G"];

/// Format a size in bytes with two decimals and a binary unit, e.g. `1.50K`
pub fn human_readable_size(size: u64) -> String {
    let mut size = size as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }

    format!("{size:.2}{}", UNITS[unit])
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::human_readable_size;

    #[test]
    fn sizes() {
        assert_eq!(human_readable_size(0), "0.00B");
        assert_eq!(human_readable_size(1023), "1023.00B");
        assert_eq!(human_readable_size(1536), "1.50K");
        assert_eq!(human_readable_size(5 * 1024 * 1024), "5.00M");
        assert_eq!(human_readable_size(3 << 40), "3072.00G");
    }
}
