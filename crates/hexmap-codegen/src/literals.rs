//! Rust literal formatting for generated code.

/// Formats a float as a Rust float literal.
///
/// Integral values keep a trailing `.0` so the literal stays an `f64`.
///
/// # Examples
///
/// ```
/// use hexmap_codegen::literals::float_literal;
///
/// assert_eq!(float_literal(12.5), "12.5");
/// assert_eq!(float_literal(-3.0), "-3.0");
/// assert_eq!(float_literal(0.0), "0.0");
/// ```
#[must_use]
pub fn float_literal(value: f64) -> String {
    format!("{value:?}")
}

/// Formats an `(x, y)` pair.
///
/// # Examples
///
/// ```
/// use hexmap_codegen::literals::coords_literal;
///
/// assert_eq!(coords_literal(12.5, -3.0), "(12.5, -3.0)");
/// ```
#[must_use]
pub fn coords_literal(x: f64, y: f64) -> String {
    format!("({}, {})", float_literal(x), float_literal(y))
}

/// Formats text as a quoted, escaped Rust string literal.
///
/// # Examples
///
/// ```
/// use hexmap_codegen::literals::string_literal;
///
/// assert_eq!(string_literal("World's End"), r#""World's End""#);
/// assert_eq!(string_literal(r#"The "Pram""#), r#""The \"Pram\"""#);
/// ```
#[must_use]
pub fn string_literal(text: &str) -> String {
    format!("{text:?}")
}
