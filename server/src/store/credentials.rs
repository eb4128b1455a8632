use crate::error::Result;

/// Strategy for hashing and checking passwords. The directory never
/// compares raw passwords itself, so swapping the scheme (e.g. for a
/// different cost factor or algorithm) leaves the auth contract alone.
pub trait CredentialScheme: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String>;

    fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool>;
}

pub struct BcryptScheme {
    cost: u32,
}

impl BcryptScheme {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptScheme {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl CredentialScheme for BcryptScheme {
    fn hash_password(&self, password: &str) -> Result<String> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool> {
        Ok(bcrypt::verify(password, stored_hash)?)
    }
}
