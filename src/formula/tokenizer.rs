use crate::element::{Element, ElementError};
use crate::formula::error::FormulaError;

/// Largest number of atoms a formula may expand to.
pub const MAX_ATOMS: usize = 256;

/// One element symbol and how many times it repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolToken<'a> {
    pub symbol: &'a str,
    pub count: u32,
    pub pos: usize,
}

/// Split a formula into symbol tokens: an uppercase letter, any following
/// lowercase letters, then an optional decimal count.
pub fn tokenize(input: &str) -> Result<Vec<SymbolToken<'_>>, FormulaError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\r' | b'\n' => {
                i += 1;
            }
            b'A'..=b'Z' => {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_lowercase() {
                    i += 1;
                }
                let symbol = &input[start..i];

                let count_start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let count = if count_start == i {
                    1
                } else {
                    input[count_start..i]
                        .parse()
                        .map_err(|_| FormulaError::InvalidCount { pos: count_start })?
                };

                tokens.push(SymbolToken {
                    symbol,
                    count,
                    pos: start,
                });
            }
            _ => {
                let ch = input[i..].chars().next().unwrap_or('\u{FFFD}');
                return Err(FormulaError::UnexpectedChar { pos: i, ch });
            }
        }
    }

    Ok(tokens)
}

/// Expand a molecular formula into one symbol per atom, in order.
///
/// Symbols are not checked against the element table here.
///
/// ```
/// use molsketch::formula::parse_molecular_formula;
///
/// assert_eq!(parse_molecular_formula("H2O").unwrap(), ["H", "H", "O"]);
/// ```
pub fn parse_molecular_formula(input: &str) -> Result<Vec<&str>, FormulaError> {
    let tokens = tokenize(input)?;
    let total = tokens
        .iter()
        .try_fold(0usize, |total, tok| total.checked_add(tok.count as usize))
        .filter(|&total| total <= MAX_ATOMS)
        .ok_or(FormulaError::TooManyAtoms { limit: MAX_ATOMS })?;

    let mut symbols = Vec::with_capacity(total);
    for tok in tokens {
        for _ in 0..tok.count {
            symbols.push(tok.symbol);
        }
    }
    Ok(symbols)
}

/// Resolve symbols against the element table.
pub fn to_elements(symbols: &[&str]) -> Result<Vec<Element>, ElementError> {
    symbols
        .iter()
        .map(|&s| {
            Element::from_symbol(s).ok_or_else(|| ElementError::Unknown {
                symbol: s.to_string(),
            })
        })
        .collect()
}
