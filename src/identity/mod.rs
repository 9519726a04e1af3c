pub mod estonian;

pub use estonian::EstonianPersonalCodeValidator;

/// structural validity check for national identity codes
pub trait IdentityCodeValidator {
    fn is_valid(&self, code: &str) -> bool;
}

impl<F> IdentityCodeValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, code: &str) -> bool {
        self(code)
    }
}
