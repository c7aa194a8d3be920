use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_AVATAR_URL;

/// A tracked person with a running balance against the user.
///
/// `balance` is the signed net amount owed: positive means the friend owes
/// the user, negative means the user owes the friend, zero means settled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub balance: f64,
}

impl Friend {
    /// Build a new friend with a fresh id and a settled balance.
    ///
    /// The id is appended to the image URI so two friends sharing the
    /// placeholder avatar base still get distinct avatars.
    pub fn new(name: impl Into<String>, image: &str) -> Self {
        let id = Uuid::new_v4();
        Friend {
            id,
            name: name.into(),
            image: format!("{}?u={}", image, id),
            balance: 0.0,
        }
    }
}

/// Demo friends the registry starts with
pub fn seed_friends() -> Vec<Friend> {
    [("Clark", -7.0), ("Sarah", 20.0), ("Anthony", 0.0)]
        .into_iter()
        .map(|(name, balance)| {
            let mut friend = Friend::new(name, DEFAULT_AVATAR_URL);
            friend.balance = balance;
            friend
        })
        .collect()
}

/// Who fronts the money for a split bill
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn as_str(&self) -> &str {
        match self {
            Payer::User => "You",
            Payer::Friend => "Your friend",
        }
    }

    pub fn toggle(&self) -> Payer {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

/// Draft input for the add-friend form
#[derive(Clone, Debug, PartialEq)]
pub struct AddFriendDraft {
    pub name: String,
    pub image: String,
}

impl Default for AddFriendDraft {
    fn default() -> Self {
        AddFriendDraft {
            name: String::new(),
            image: String::from(DEFAULT_AVATAR_URL),
        }
    }
}

impl AddFriendDraft {
    /// Both fields are required; validation is a presence check only
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.image.is_empty()
    }
}

/// Draft input for the split-bill form.
///
/// The amounts are kept as text buffers while the form is open; the friend's
/// share is always derived from the bill and the user's share, never stored.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SplitDraft {
    pub bill: String,
    pub user_paid: String,
    pub payer: Payer,
}

impl SplitDraft {
    pub fn bill_total(&self) -> Option<f64> {
        parse_amount(&self.bill)
    }

    pub fn user_share(&self) -> Option<f64> {
        parse_amount(&self.user_paid)
    }

    /// What the friend pays of the bill. None until a bill total is entered;
    /// an empty user share reads as zero.
    pub fn friend_share(&self) -> Option<f64> {
        let bill = self.bill_total()?;
        Some(bill - self.user_share().unwrap_or(0.0))
    }

    /// The amount handed to the balance update for the current payer.
    /// None until both entered amounts parse.
    pub fn amount(&self) -> Option<f64> {
        let bill = self.bill_total()?;
        let user = self.user_share()?;
        Some(match self.payer {
            Payer::User => user,
            Payer::Friend => bill - user,
        })
    }

    /// Keep the user share within the bill total. Called after every edit of
    /// either amount, so lowering the bill pulls an already entered share
    /// down with it rather than leaving it out of range.
    pub fn clamp_user_share(&mut self) {
        if let (Some(bill), Some(user)) = (self.bill_total(), self.user_share()) {
            if user > bill {
                self.user_paid = format_amount(bill);
            }
        }
    }
}

/// Parse a form buffer as a non-negative amount
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Format an amount back into a form buffer, dropping a trailing ".0"
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
