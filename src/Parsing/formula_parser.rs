use indexmap::IndexMap;
use thiserror::Error;

/// error types for formula parsing
#[derive(Debug, Error, PartialEq)]
pub enum FormulaParseError {
    #[error("Error while parsing chemical formula: {formula}. Space characters are not allowed.")]
    SpaceInFormula { formula: String },
    #[error("Error while parsing chemical formula: {formula}. Found the invalid character: {character}")]
    InvalidCharacter { formula: String, character: char },
    #[error("Error while parsing chemical formula: {formula}. Failed to read the number: {number}")]
    BadNumber { formula: String, number: String },
}

/// Parses a chemical formula and returns a map of element symbols and their
/// amounts, in order of first occurrence. Amounts are f64 because hydrates and
/// solid solutions may carry fractional stoichiometry, e.g. Ca0.5Mg0.5CO3.
/// Repeated occurrences of the same element are accumulated into one entry:
/// C5H6OOH gives {"C": 5, "H": 7, "O": 2}.
///
/// Understood notation:
/// 1) numeric multipliers before a segment: 2NaNO3*NH4NO3
/// 2) parenthesized groups with a multiplier after the bracket: CaMg(CO3)2, (Ef(AbCd)3)2
/// 3) aggregate state marks, i.e. brackets with only lowercase letters inside,
///    stop the scan: NaCl(aq) is just Na and Cl
/// 4) hydrate separators * and : between segments: CaCl2*10H2O
/// 5) everything after +, - or [ belongs to the charge notation and is ignored here
pub fn parse_formula(formula: &str) -> Result<IndexMap<String, f64>, FormulaParseError> {
    let mut composition: IndexMap<String, f64> = IndexMap::new();

    // a bare charged electron species has no elements at all
    if formula.starts_with("e-") || formula.starts_with("e[-]") {
        return Ok(composition);
    }

    let chars: Vec<char> = formula.chars().collect();
    let end = chars.len();
    parse_segment(formula, &chars, 0, end, 1.0, &mut composition)?;

    // repeated additions and multiplications of f64 amounts leave round-off
    // residue: Na2SO4*(NH4)2SO4*4H2O may end up with 15.99999998 atoms of H
    // instead of 16. The transform below collapses such residues.
    for (_, amount) in composition.iter_mut() {
        *amount = cleanup_roundoff(*amount);
    }

    Ok(composition)
}

/// Collapses round-off residue left by accumulation of f64 atom amounts.
/// The magnitude 1e8 is matched to typical atom counts; the transform is
/// idempotent.
pub fn cleanup_roundoff(x: f64) -> f64 {
    (x + 1e8) - 1e8
}

// scans the slice [begin, end) of the formula, multiplying every parsed atom
// amount by the running scalar. Parenthesized groups are handled by descending
// into the group with scalar * multiplier, so call depth is bounded by the
// nesting depth of brackets only.
fn parse_segment(
    formula: &str,
    chars: &[char],
    mut begin: usize,
    end: usize,
    mut scalar: f64,
    composition: &mut IndexMap<String, f64>,
) -> Result<(), FormulaParseError> {
    while begin < end {
        let c = chars[begin];
        if c.is_ascii_digit() || c == '.' {
            // multiplier for the rest of the segment: 2NaNO3*NH4NO3, CaCl2*10H2O
            let (number, next) = parse_number(formula, chars, begin, end)?;
            scalar *= number;
            begin = next;
        } else if c.is_ascii_uppercase() {
            // element symbol with an optional amount: H2O, HCO3-, Ab2Xyz3
            let (symbol, after_symbol) = parse_element_symbol(chars, begin, end);
            let (natoms, next) = parse_number(formula, chars, after_symbol, end)?;
            *composition.entry(symbol).or_insert(0.0) += scalar * natoms;
            begin = next;
        } else if c == '(' {
            let close = find_matched_parenthesis(chars, begin, end);
            let inner_begin = begin + 1;
            let inner_end = close.min(end);

            // brackets with only lowercase letters inside are aggregate state
            // marks such as (aq), (l), (s), (cr); the rest of the formula
            // string is ignored then
            if chars[inner_begin..inner_end].iter().all(|ch| ch.is_ascii_lowercase()) {
                return Ok(());
            }

            let after_close = if close < end { close + 1 } else { end };
            let (number, next) = parse_number(formula, chars, after_close, end)?;
            parse_segment(formula, chars, inner_begin, inner_end, scalar * number, composition)?;
            begin = next;
        } else if c == '*' || c == ':' {
            // hydrate separator. The scalar is reset to 1.0 so that the segment
            // after * or : does not inherit the current scalar, otherwise
            // 2CaCl2*20H2O would be parsed with 40 atoms of O instead of 20!
            scalar = 1.0;
            begin += 1;
        } else if c == '+' || c == '-' || c == '[' {
            // charge notation starts here, nothing after it carries elements
            return Ok(());
        } else if c == ' ' {
            return Err(FormulaParseError::SpaceInFormula {
                formula: formula.to_string(),
            });
        } else {
            return Err(FormulaParseError::InvalidCharacter {
                formula: formula.to_string(),
                character: c,
            });
        }
    }
    Ok(())
}

// element symbol is one uppercase letter plus the maximal run of lowercase
// letters after it
fn parse_element_symbol(chars: &[char], begin: usize, end: usize) -> (String, usize) {
    let mut i = begin + 1;
    while i < end && chars[i].is_ascii_lowercase() {
        i += 1;
    }
    (chars[begin..i].iter().collect(), i)
}

// reads the maximal run of digits and dots starting at begin and parses it as
// f64; if there is no such run the amount defaults to 1.0
fn parse_number(
    formula: &str,
    chars: &[char],
    begin: usize,
    end: usize,
) -> Result<(f64, usize), FormulaParseError> {
    if begin >= end {
        return Ok((1.0, begin));
    }
    if !(chars[begin].is_ascii_digit() || chars[begin] == '.') {
        return Ok((1.0, begin));
    }
    let mut i = begin;
    while i < end && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }
    let run: String = chars[begin..i].iter().collect();
    match run.parse::<f64>() {
        Ok(number) => Ok((number, i)),
        Err(_) => Err(FormulaParseError::BadNumber {
            formula: formula.to_string(),
            number: run,
        }),
    }
}

// position of the closing bracket matching the opening bracket at begin, found
// by a depth counter; end if there is no match
fn find_matched_parenthesis(chars: &[char], begin: usize, end: usize) -> usize {
    let mut level: i32 = 0;
    let mut i = begin + 1;
    while i < end {
        match chars[i] {
            '(' => level += 1,
            ')' => {
                level -= 1;
                if level == -1 {
                    return i;
                }
            }
            _ => {}
        }
        i += 1;
    }
    end
}
