use strum::{Display, EnumString};

/// Gender as submitted by the input form. Only the exact lowercase
/// strings `male` and `female` are accepted.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl From<Gender> for u8 {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!(Gender::from_str("male"), Ok(Gender::Male));
        assert_eq!(Gender::from_str("female"), Ok(Gender::Female));
    }

    #[test]
    fn rejects_anything_else() {
        let test_data = ["", "unknown", "Male", "FEMALE", " male", "female ", "m", "f"];

        for (i, input) in test_data.into_iter().enumerate() {
            assert!(Gender::from_str(input).is_err(), "Test case #{}", i);
        }
    }

    #[test]
    fn encodes_male_as_zero_and_female_as_one() {
        assert_eq!(u8::from(Gender::Male), 0);
        assert_eq!(u8::from(Gender::Female), 1);
    }

    #[test]
    fn displays_form_value() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Female.to_string(), "female");
    }
}
