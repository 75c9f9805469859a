/// Lenient integer parsing for form fields and query parameters.
///
/// Accepts leading whitespace, an optional sign and a run of decimal digits;
/// anything after the digits is ignored (`"12px"` is 12). Values outside
/// `i64` saturate. Returns `None` when no digit follows the sign.
pub fn parse_leading_int(
  raw: &str
) -> Option<i64> {
  let trimmed = raw.trim_start();
  let (negative, sign_len) =
    match trimmed.as_bytes().first() {
      | Some(b'-') => (true, 1),
      | Some(b'+') => (false, 1),
      | _ => (false, 0)
    };

  let digits_len = trimmed[sign_len..]
    .bytes()
    .take_while(u8::is_ascii_digit)
    .count();
  if digits_len == 0 {
    return None;
  }

  // only overflow can fail once the digits are known
  Some(
    trimmed[..sign_len + digits_len]
      .parse::<i64>()
      .unwrap_or(if negative {
        i64::MIN
      } else {
        i64::MAX
      })
  )
}

/// Parses a non-negative form value; negatives and garbage yield `None`.
pub fn parse_form_u32(
  raw: &str
) -> Option<u32> {
  parse_leading_int(raw)
    .and_then(|value| {
      u32::try_from(value).ok()
    })
}
