use indexmap::IndexMap;
use thiserror::Error;

/// error types for reaction record parsing
#[derive(Debug, Error, PartialEq)]
pub enum ReactionParseError {
    #[error("Cannot parse the reaction equation `{equation}`. Expecting an equation with at most a single equal sign `=` separating reactants from products.")]
    MultipleEqualSigns { equation: String },
    #[error("Cannot parse the term `{term}` in `{text}`. Expecting a `coefficient:species` pair.")]
    MalformedTerm { term: String, text: String },
    #[error("Cannot parse the stoichiometric coefficient `{coefficient}` in the term `{term}`.")]
    BadCoefficient { coefficient: String, term: String },
}

/// Parses a whitespace separated list of coefficient:species tokens into pairs
/// of species names and stoichiometric coefficients, e.g.
/// "-1:H2O 1:H+ 1:OH-" gives [("H2O", -1.0), ("H+", 1.0), ("OH-", 1.0)].
/// Signs are taken from the coefficient text as written, nothing is inferred.
pub fn parse_tagged_reaction(text: &str) -> Result<Vec<(String, f64)>, ReactionParseError> {
    let mut terms = Vec::new();
    for word in text.split_whitespace() {
        let (coefficient, species) = split_tagged_term(word, text)?;
        terms.push((species, coefficient));
    }
    Ok(terms)
}

/// Parses a whitespace separated list of coefficient:species tokens into a map
/// of species names and accumulated coefficients: repeated species names are
/// summed into one entry kept at the position of the first occurrence, so
/// "1:Na 2:Cl 1:Na" gives {"Na": 2.0, "Cl": 2.0} with Na listed first.
pub fn parse_number_string_pairs(text: &str) -> Result<IndexMap<String, f64>, ReactionParseError> {
    let mut pairs: IndexMap<String, f64> = IndexMap::new();
    for word in text.split_whitespace() {
        let (coefficient, species) = split_tagged_term(word, text)?;
        *pairs.entry(species).or_insert(0.0) += coefficient;
    }
    Ok(pairs)
}

// one coefficient:species token
fn split_tagged_term(word: &str, text: &str) -> Result<(f64, String), ReactionParseError> {
    let (coefficient_str, species) = match word.split_once(':') {
        Some(pair) => pair,
        None => {
            return Err(ReactionParseError::MalformedTerm {
                term: word.to_string(),
                text: text.to_string(),
            });
        }
    };
    let coefficient =
        coefficient_str
            .parse::<f64>()
            .map_err(|_| ReactionParseError::BadCoefficient {
                coefficient: coefficient_str.to_string(),
                term: word.to_string(),
            })?;
    Ok((coefficient, species.to_string()))
}

/// Parses a reaction equation like "2*H2 + O2 = 2*H2O" into pairs of species
/// names and stoichiometric coefficients. Coefficients of reactants are
/// negated, coefficients of products keep their sign, so the example above
/// gives [("H2", -2.0), ("O2", -1.0), ("H2O", 2.0)]. An equation without '='
/// holds only reactants. A species without an explicit coefficient gets 1.0.
/// Duplicate species on one or both sides stay as separate entries in the
/// order they are written.
pub fn parse_reaction_equation(equation: &str) -> Result<Vec<(String, f64)>, ReactionParseError> {
    let sides: Vec<&str> = equation.split('=').collect();
    if sides.len() > 2 {
        return Err(ReactionParseError::MultipleEqualSigns {
            equation: equation.to_string(),
        });
    }
    let reactants = sides[0];
    let products = if sides.len() == 2 { sides[1] } else { "" };

    let mut terms = Vec::new();
    collect_equation_side(reactants, -1.0, &mut terms)?;
    collect_equation_side(products, 1.0, &mut terms)?;
    Ok(terms)
}

// one side of the equation: whitespace separated tokens, lone '+' tokens are
// separators, every other token is either a bare species name or
// coefficient*species
fn collect_equation_side(
    side: &str,
    side_sign: f64,
    terms: &mut Vec<(String, f64)>,
) -> Result<(), ReactionParseError> {
    for word in side.split_whitespace() {
        if word == "+" {
            continue;
        }
        let (coefficient, species) = match word.split_once('*') {
            Some((number, name)) => {
                let number =
                    number
                        .parse::<f64>()
                        .map_err(|_| ReactionParseError::BadCoefficient {
                            coefficient: number.to_string(),
                            term: word.to_string(),
                        })?;
                (number, name)
            }
            None => (1.0, word),
        };
        terms.push((species.to_string(), side_sign * coefficient));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_reaction() {
        let terms = parse_tagged_reaction("-1:H2O 1:H+ 1:OH-").unwrap();
        assert_eq!(
            terms,
            vec![
                ("H2O".to_string(), -1.0),
                ("H+".to_string(), 1.0),
                ("OH-".to_string(), 1.0)
            ]
        );
    }

    #[test]
    fn test_tagged_reaction_keeps_duplicates() {
        let terms = parse_tagged_reaction("1:Na 2:Cl 1:Na").unwrap();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[2], ("Na".to_string(), 1.0));
    }

    #[test]
    fn test_parse_number_string_pairs_accumulates() {
        let pairs = parse_number_string_pairs("1:Na 2:Cl 1:Na").unwrap();
        assert_eq!(
            pairs.into_iter().collect::<Vec<_>>(),
            vec![("Na".to_string(), 2.0), ("Cl".to_string(), 2.0)]
        );
    }

    #[test]
    fn test_malformed_tagged_terms() {
        assert_eq!(
            parse_tagged_reaction("1:Na Cl").unwrap_err(),
            ReactionParseError::MalformedTerm {
                term: "Cl".to_string(),
                text: "1:Na Cl".to_string()
            }
        );
        assert_eq!(
            parse_number_string_pairs("x:Na").unwrap_err(),
            ReactionParseError::BadCoefficient {
                coefficient: "x".to_string(),
                term: "x:Na".to_string()
            }
        );
    }

    #[test]
    fn test_parse_reaction_equation() {
        let terms = parse_reaction_equation("2*H2 + O2 = 2*H2O").unwrap();
        assert_eq!(
            terms,
            vec![
                ("H2".to_string(), -2.0),
                ("O2".to_string(), -1.0),
                ("H2O".to_string(), 2.0)
            ]
        );
    }

    #[test]
    fn test_equation_without_products() {
        // no '=' means the whole record is reactants
        let terms = parse_reaction_equation("CaCO3 + 2*H+").unwrap();
        assert_eq!(
            terms,
            vec![("CaCO3".to_string(), -1.0), ("H+".to_string(), -2.0)]
        );
    }

    #[test]
    fn test_equation_with_charged_species() {
        let terms = parse_reaction_equation("CaCO3 + 2*H+ = Ca++ + CO2 + H2O").unwrap();
        assert_eq!(
            terms,
            vec![
                ("CaCO3".to_string(), -1.0),
                ("H+".to_string(), -2.0),
                ("Ca++".to_string(), 1.0),
                ("CO2".to_string(), 1.0),
                ("H2O".to_string(), 1.0)
            ]
        );
    }

    #[test]
    fn test_equation_duplicates_are_kept_per_side() {
        let terms = parse_reaction_equation("H2O = H2O").unwrap();
        assert_eq!(
            terms,
            vec![("H2O".to_string(), -1.0), ("H2O".to_string(), 1.0)]
        );
    }

    #[test]
    fn test_fractional_coefficients() {
        let terms = parse_reaction_equation("H2 + 0.5*O2 = H2O").unwrap();
        assert_eq!(terms[1], ("O2".to_string(), -0.5));
    }

    #[test]
    fn test_multiple_equal_signs_rejected() {
        let err = parse_reaction_equation("A = B = C").unwrap_err();
        assert_eq!(
            err,
            ReactionParseError::MultipleEqualSigns {
                equation: "A = B = C".to_string()
            }
        );
        assert!(err.to_string().contains("A = B = C"));
    }
}
