use anyhow::bail;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            bail!("branch name cannot be empty");
        }

        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            bail!("invalid branch name: {}", name);
        }

        if name.contains("..") || name.starts_with('-') {
            bail!("invalid branch name: {}", name);
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
