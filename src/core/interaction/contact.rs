use crate::domain::model::Profile;
use crate::domain::ports::BrowserAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    Email,
    LinkedIn,
    GitHub,
    TryHackMe,
    Twitter,
}

pub struct ContactShortcuts<'a> {
    profile: &'a Profile,
}

impl<'a> ContactShortcuts<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    /// `None` when the target has no configured URL.
    pub fn on_click(&self, target: ContactTarget) -> Option<BrowserAction> {
        let social = &self.profile.social;
        let url = match target {
            ContactTarget::Email => {
                return Some(BrowserAction::Navigate {
                    url: format!("mailto:{}", self.profile.email),
                })
            }
            ContactTarget::LinkedIn => social.linkedin.as_ref(),
            ContactTarget::GitHub => social.github.as_ref(),
            ContactTarget::TryHackMe => social.tryhackme.as_ref(),
            ContactTarget::Twitter => social.twitter.as_ref(),
        };

        url.map(|url| BrowserAction::OpenDetached { url: url.clone() })
    }
}
