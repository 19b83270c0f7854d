pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Number of terminal columns `s` occupies, assuming one column per char.
pub fn width(s: &str) -> usize {
    s.chars().count()
}

/// Appends `s` to `buf`, padded with spaces to `width` columns. Right-aligns
/// if `right` is true.
pub fn push_padded(buf: &mut String, s: &str, width: usize, right: bool) {
    let pad = width.saturating_sub(self::width(s));
    if right {
        buf.extend(std::iter::repeat_n(' ', pad));
        buf.push_str(s);
    } else {
        buf.push_str(s);
        buf.extend(std::iter::repeat_n(' ', pad));
    }
}
