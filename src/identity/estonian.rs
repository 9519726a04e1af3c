use chrono::NaiveDate;

use super::IdentityCodeValidator;

const CODE_LENGTH: usize = 11;
const FIRST_PASS_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_PASS_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// validator for estonian personal codes (isikukood)
///
/// layout is `GYYMMDDSSSC`: gender and century digit, birth date, serial
/// number and a mod-11 check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianPersonalCodeValidator;

impl EstonianPersonalCodeValidator {
    pub fn new() -> Self {
        Self
    }

    /// birth date encoded in the code, none if the code is malformed
    pub fn birth_date(code: &str) -> Option<NaiveDate> {
        let digits = parse_digits(code)?;

        let century = match digits[0] {
            1 | 2 => 1800,
            3 | 4 => 1900,
            5 | 6 => 2000,
            7 | 8 => 2100,
            _ => return None,
        };
        let year = century + (digits[1] * 10 + digits[2]) as i32;
        let month = digits[3] * 10 + digits[4];
        let day = digits[5] * 10 + digits[6];

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// expected check digit for the first ten digits
    pub fn check_digit(digits: &[u32]) -> u32 {
        let weighted = |weights: &[u32; 10]| -> u32 {
            digits.iter().zip(weights).map(|(d, w)| d * w).sum::<u32>() % 11
        };

        match weighted(&FIRST_PASS_WEIGHTS) {
            10 => match weighted(&SECOND_PASS_WEIGHTS) {
                10 => 0,
                remainder => remainder,
            },
            remainder => remainder,
        }
    }
}

impl IdentityCodeValidator for EstonianPersonalCodeValidator {
    fn is_valid(&self, code: &str) -> bool {
        let Some(digits) = parse_digits(code) else {
            return false;
        };

        Self::birth_date(code).is_some() && Self::check_digit(&digits[..10]) == digits[10]
    }
}

fn parse_digits(code: &str) -> Option<Vec<u32>> {
    if code.len() != CODE_LENGTH {
        return None;
    }
    code.chars().map(|c| c.to_digit(10)).collect()
}
