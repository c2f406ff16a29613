use base64::{engine::general_purpose::STANDARD, Engine};
use rand::Rng;

pub const IDENTITY_KEY: &str = "gamified-todo-userid";
const PREFIX: &str = "User-";
const TOKEN_LEN: usize = 8;
const DISPLAY_LEN: usize = 24;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: String,
}

impl Identity {
    pub fn new(user_id: String) -> Self {
        Self { user_id }
    }

    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let token: String = (0..TOKEN_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self::new(format!("{PREFIX}{token}"))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Reversibly encoded id shown on the page. Not a secret.
    pub fn display_id(&self) -> String {
        STANDARD
            .encode(self.user_id.as_bytes())
            .chars()
            .take(DISPLAY_LEN)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_prefix_and_base36_token() {
        let identity = Identity::generate();
        let token = identity
            .user_id()
            .strip_prefix("User-")
            .expect("missing prefix");
        assert_eq!(token.len(), 8);
        assert!(token.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn display_id_is_truncated_base64() {
        let identity = Identity::new("User-k3j9x0qa".to_string());
        let display = identity.display_id();
        assert_eq!(display.len(), 20);
        assert_eq!(display, STANDARD.encode("User-k3j9x0qa"));

        let long = Identity::new("User-".to_string() + &"z".repeat(40));
        assert_eq!(long.display_id().len(), 24);
    }
}
