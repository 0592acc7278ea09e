//! Mailbox identity and the registry of domains served by tempmail.plus.

use crate::{Error, Result};
use rand::Rng;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use std::fmt;
use std::str::FromStr;

const RANDOM_ALIAS_LEN: usize = 10;

/// Domains accepted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    MailtoPlus,
    FexpostCom,
    FexboxOrg,
    MailboxInUa,
    RoverInfo,
    ChitthiIn,
    FextempCom,
    AnyPink,
    MerepostCom,
}

impl Domain {
    /// Every registered domain.
    pub const ALL: [Domain; 9] = [
        Domain::MailtoPlus,
        Domain::FexpostCom,
        Domain::FexboxOrg,
        Domain::MailboxInUa,
        Domain::RoverInfo,
        Domain::ChitthiIn,
        Domain::FextempCom,
        Domain::AnyPink,
        Domain::MerepostCom,
    ];

    /// Host name as used in addresses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::MailtoPlus => "mailto.plus",
            Domain::FexpostCom => "fexpost.com",
            Domain::FexboxOrg => "fexbox.org",
            Domain::MailboxInUa => "mailbox.in.ua",
            Domain::RoverInfo => "rover.info",
            Domain::ChitthiIn => "chitthi.in",
            Domain::FextempCom => "fextemp.com",
            Domain::AnyPink => "any.pink",
            Domain::MerepostCom => "merepost.com",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = Error;

    /// Exact, case-sensitive match against the registry.
    fn from_str(s: &str) -> Result<Self> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::InvalidDomain(s.to_string()))
    }
}

/// A disposable mailbox: an alias on one of the registered [`Domain`]s.
///
/// Immutable once built. The optional PIN is sent as the `epin` query
/// parameter and defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mailbox {
    alias: String,
    domain: Domain,
    pin: String,
}

impl Mailbox {
    /// Build a mailbox from an alias and a domain name.
    ///
    /// # Errors
    /// [`Error::InvalidAlias`] if `alias` is empty, [`Error::InvalidDomain`]
    /// if `domain` is not a registered domain.
    ///
    /// # Examples
    /// ```
    /// # use tempmail_client::Mailbox;
    /// let mailbox = Mailbox::new("abc123", "mailbox.in.ua")?;
    /// assert_eq!(mailbox.to_string(), "abc123@mailbox.in.ua");
    /// # Ok::<(), tempmail_client::Error>(())
    /// ```
    pub fn new(alias: impl Into<String>, domain: &str) -> Result<Self> {
        let alias = alias.into();
        if alias.is_empty() {
            return Err(Error::InvalidAlias);
        }
        let domain = domain.parse()?;
        Ok(Self {
            alias,
            domain,
            pin: String::new(),
        })
    }

    /// Random lowercase alphanumeric alias on a random registered domain.
    pub fn random() -> Self {
        let domain = Domain::ALL
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(Domain::MailtoPlus);
        Self::random_in(domain)
    }

    /// Random lowercase alphanumeric alias on the given domain.
    pub fn random_in(domain: Domain) -> Self {
        let alias = rand::rng()
            .sample_iter(Alphanumeric)
            .take(RANDOM_ALIAS_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        Self {
            alias,
            domain,
            pin: String::new(),
        }
    }

    /// Attach the mailbox PIN sent as `epin`.
    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = pin.into();
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.alias, self.domain)
    }
}

impl FromStr for Mailbox {
    type Err = Error;

    /// Parse a full `alias@domain` address.
    fn from_str(s: &str) -> Result<Self> {
        let (alias, domain) = s
            .rsplit_once('@')
            .ok_or_else(|| Error::InvalidDomain(s.to_string()))?;
        Self::new(alias, domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_alias_at_domain_for_every_domain() {
        for domain in Domain::ALL {
            let mailbox = Mailbox::new("abc123", domain.as_str()).unwrap();
            assert_eq!(mailbox.to_string(), format!("abc123@{}", domain.as_str()));
            assert_eq!(mailbox.domain(), domain);
        }
    }

    #[test]
    fn builds_known_mailbox() {
        let mailbox = Mailbox::new("abc123", "mailbox.in.ua").unwrap();
        assert_eq!(mailbox.to_string(), "abc123@mailbox.in.ua");
        assert_eq!(mailbox.alias(), "abc123");
        assert_eq!(mailbox.pin(), "");
    }

    #[test]
    fn rejects_empty_alias() {
        assert!(matches!(
            Mailbox::new("", "mailbox.in.ua"),
            Err(Error::InvalidAlias)
        ));
        // alias is checked before the domain
        assert!(matches!(
            Mailbox::new("", "example.com"),
            Err(Error::InvalidAlias)
        ));
    }

    #[test]
    fn rejects_unknown_domain() {
        match Mailbox::new("abc123", "example.com") {
            Err(Error::InvalidDomain(d)) => assert_eq!(d, "example.com"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            Mailbox::new("abc123", "MAILBOX.IN.UA"),
            Err(Error::InvalidDomain(_))
        ));
    }

    #[test]
    fn parses_full_address() {
        let mailbox: Mailbox = "abc123@fexbox.org".parse().unwrap();
        assert_eq!(mailbox.alias(), "abc123");
        assert_eq!(mailbox.domain(), Domain::FexboxOrg);

        match "abc123".parse::<Mailbox>() {
            Err(Error::InvalidDomain(d)) => assert_eq!(d, "abc123"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            "@fexbox.org".parse::<Mailbox>(),
            Err(Error::InvalidAlias)
        ));
    }

    #[test]
    fn random_mailbox_is_valid() {
        let mailbox = Mailbox::random();
        assert_eq!(mailbox.alias().len(), RANDOM_ALIAS_LEN);
        assert!(
            mailbox
                .alias()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
        let reparsed: Mailbox = mailbox.to_string().parse().unwrap();
        assert_eq!(reparsed, mailbox);

        assert_eq!(Mailbox::random_in(Domain::AnyPink).domain(), Domain::AnyPink);
    }

    #[test]
    fn keeps_pin() {
        let mailbox = Mailbox::new("abc123", "any.pink").unwrap().with_pin("1234");
        assert_eq!(mailbox.pin(), "1234");
        assert_eq!(mailbox.to_string(), "abc123@any.pink");
    }
}
