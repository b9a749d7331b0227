//! 3GPP registration helpers.

/// Parse a PLMN from a 3GPP operator code such as `"310410"`.
///
/// Mirrors `strtoull(code, NULL, 10)`: leading whitespace is skipped and the
/// leading run of ASCII digits is used. No digits, no code, or a value that
/// does not fit in `u32` all give `0`.
pub fn parse_plmn(operator_code: Option<&str>) -> u32 {
    let Some(code) = operator_code else {
        return 0;
    };

    let code = code.trim_start();
    let digits_end = code
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(code.len());

    code[..digits_end].parse().unwrap_or(0)
}
