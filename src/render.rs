use std::fmt::{self, Write};

use crate::value::Value;

/// Literal rendering of a single element inside a bracketed sequence
///
/// Strings are quoted, numbers are not.
pub trait Repr {
    fn fmt_repr(&self, f: &mut dyn Write) -> fmt::Result;
}

impl Repr for Value {
    fn fmt_repr(&self, f: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Int(v) => v.fmt_repr(f),
            Value::Float(v) => v.fmt_repr(f),
            Value::Text(v) => v.as_str().fmt_repr(f),
        }
    }
}

impl Repr for i64 {
    fn fmt_repr(&self, f: &mut dyn Write) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Repr for f64 {
    fn fmt_repr(&self, f: &mut dyn Write) -> fmt::Result {
        if self.is_nan() {
            f.write_str("nan")
        } else if self.is_infinite() {
            f.write_str(if *self > 0.0 { "inf" } else { "-inf" })
        } else {
            // Debug keeps the fractional part on whole numbers (1.0, not 1) and
            // switches to an exponent at the same magnitudes as the literal form
            let debug = format!("{self:?}");
            match debug.split_once('e') {
                Some((mantissa, exp)) => {
                    let (sign, digits) = match exp.strip_prefix('-') {
                        Some(digits) => ('-', digits),
                        None => ('+', exp),
                    };
                    write!(f, "{mantissa}e{sign}{digits:0>2}")
                }
                None => f.write_str(&debug),
            }
        }
    }
}

impl Repr for str {
    fn fmt_repr(&self, f: &mut dyn Write) -> fmt::Result {
        let quote = if self.contains('\'') && !self.contains('"') {
            '"'
        } else {
            '\''
        };

        f.write_char(quote)?;
        for c in self.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c == quote => {
                    f.write_char('\\')?;
                    f.write_char(c)?;
                }
                c if is_unprintable(c) => match u32::from(c) {
                    n @ 0..=0xff => write!(f, "\\x{n:02x}")?,
                    n @ 0x100..=0xffff => write!(f, "\\u{n:04x}")?,
                    n => write!(f, "\\U{n:08x}")?,
                },
                c => f.write_char(c)?,
            }
        }
        f.write_char(quote)
    }
}

// Control characters and every whitespace except the plain space
fn is_unprintable(c: char) -> bool {
    c.is_control() || (c.is_whitespace() && c != ' ')
}

impl Repr for &str {
    fn fmt_repr(&self, f: &mut dyn Write) -> fmt::Result {
        (**self).fmt_repr(f)
    }
}

impl Repr for String {
    fn fmt_repr(&self, f: &mut dyn Write) -> fmt::Result {
        self.as_str().fmt_repr(f)
    }
}

/// Writes `items` as `[a, b, c]`
pub(crate) fn write_seq<'a, T, I>(f: &mut dyn Write, items: I) -> fmt::Result
where
    T: Repr + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_char('[')?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt_repr(f)?;
    }
    f.write_char(']')
}
