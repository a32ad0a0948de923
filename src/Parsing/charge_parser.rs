use regex::Regex;

/// Extracts the electric charge encoded in a species name. A trailing name
/// suffix in parentheses like (aq) or (cr) is stripped first, then three
/// notations are tried in a fixed priority order, the first nonzero result
/// wins:
/// 1) repeated trailing signs: Fe+++ is +3, SO4-- is -2
/// 2) number and sign between brackets, sign last: Fe[3+] is +3, e[-] is -1
/// 3) last sign in the name followed by the magnitude: CO3-2 is -2, Na+ is +1
///
/// A name without any charge notation gives 0.0, the function never fails.
pub fn parse_electric_charge(formula: &str) -> f64 {
    let (base, _suffix) = split_species_name_suffix(formula);

    let charge = charge_from_trailing_signs(base);
    if charge != 0.0 {
        return charge;
    }
    let charge = charge_from_bracket_notation(base);
    if charge != 0.0 {
        return charge;
    }
    charge_from_sign_number(base)
}

/// Splits a species name into the chemical part and the trailing parenthesized
/// suffix, e.g. "Ca++(aq)" gives ("Ca++", Some("aq")) and "CaCO3" gives
/// ("CaCO3", None). Names ending with ')' but without a matching '(' are
/// returned unchanged.
pub fn split_species_name_suffix(name: &str) -> (&str, Option<&str>) {
    if !name.ends_with(')') {
        return (name, None);
    }
    match name.rfind('(') {
        Some(open) => (&name[..open], Some(&name[open + 1..name.len() - 1])),
        None => (name, None),
    }
}

// notation 1: the maximal run of identical signs at the end of the name
fn charge_from_trailing_signs(formula: &str) -> f64 {
    let bytes = formula.as_bytes();
    let last = match bytes.last() {
        Some(&b) => b,
        None => return 0.0,
    };
    let signval = match last {
        b'+' => 1.0,
        b'-' => -1.0,
        _ => return 0.0,
    };
    let run = bytes.iter().rev().take_while(|&&b| b == last).count();
    run as f64 * signval
}

// notation 2: the name ends with ']', the sign is the last character inside
// the brackets and the optional magnitude digits come right after '['.
// Fe[3+] is +3, Cl[-] is -1. A missing sign at that position means the
// brackets hold something else and the notation does not apply.
fn charge_from_bracket_notation(formula: &str) -> f64 {
    if !formula.ends_with(']') {
        return 0.0;
    }
    let open = match formula.rfind('[') {
        Some(i) => i,
        None => return 0.0,
    };
    let inner = &formula[open + 1..formula.len() - 1];
    let sign = match inner.chars().last() {
        Some('+') => 1.0,
        Some('-') => -1.0,
        _ => return 0.0,
    };
    let digits = &inner[..inner.len() - 1];
    if digits.is_empty() {
        return sign;
    }
    match digits.parse::<f64>() {
        Ok(magnitude) => sign * magnitude,
        Err(_) => 0.0,
    }
}

// notation 3: the sign occurring closest to the end of the name, with the
// digits right after it as the magnitude. A sign in the last position means
// magnitude 1, so Na+ is +1 and CO3-2 is -2.
fn charge_from_sign_number(formula: &str) -> f64 {
    let re = Regex::new(r"([+-])([0-9]+(\.[0-9]*)?)?").unwrap();
    let captures = match re.captures_iter(formula).last() {
        Some(cap) => cap,
        None => return 0.0,
    };
    let sign = if &captures[1] == "+" { 1.0 } else { -1.0 };
    let magnitude = captures
        .get(2)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(1.0);
    sign * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_signs() {
        assert_eq!(parse_electric_charge("Fe+++"), 3.0);
        assert_eq!(parse_electric_charge("SO4--"), -2.0);
        assert_eq!(parse_electric_charge("Na+"), 1.0);
        assert_eq!(parse_electric_charge("Cl-"), -1.0);
    }

    #[test]
    fn test_bracket_notation() {
        assert_eq!(parse_electric_charge("Fe[3+]"), 3.0);
        assert_eq!(parse_electric_charge("SO4[2-]"), -2.0);
        assert_eq!(parse_electric_charge("Cl[-]"), -1.0);
        assert_eq!(parse_electric_charge("e[-]"), -1.0);
    }

    #[test]
    fn test_sign_number_notation() {
        assert_eq!(parse_electric_charge("CO3-2"), -2.0);
        assert_eq!(parse_electric_charge("Fe+3"), 3.0);
        // the sign inside the brackets is picked up by the last-sign scan
        assert_eq!(parse_electric_charge("Fe[+3]"), 3.0);
    }

    #[test]
    fn test_no_charge() {
        assert_eq!(parse_electric_charge("H2O"), 0.0);
        assert_eq!(parse_electric_charge("CaCO3"), 0.0);
        assert_eq!(parse_electric_charge(""), 0.0);
    }

    #[test]
    fn test_suffix_is_stripped_before_parsing() {
        assert_eq!(parse_electric_charge("Ca++(aq)"), 2.0);
        assert_eq!(parse_electric_charge("CO3-2(aq)"), -2.0);
        assert_eq!(parse_electric_charge("NaCl(aq)"), 0.0);
    }

    #[test]
    fn test_split_species_name_suffix() {
        assert_eq!(split_species_name_suffix("Ca++(aq)"), ("Ca++", Some("aq")));
        assert_eq!(split_species_name_suffix("CaCO3(cr)"), ("CaCO3", Some("cr")));
        assert_eq!(split_species_name_suffix("CaCO3"), ("CaCO3", None));
        assert_eq!(split_species_name_suffix("H2O"), ("H2O", None));
    }
}
