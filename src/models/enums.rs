use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Role {
    Patient => "patient",
    Doctor => "doctor",
});

str_enum!(Trimester {
    First => "first",
    Second => "second",
    Third => "third",
});

str_enum!(Channel {
    Doctor => "doctor",
    Moms => "moms",
});

str_enum!(Mood {
    Great => "great",
    Good => "good",
    Okay => "okay",
    Tired => "tired",
    Unwell => "unwell",
});

str_enum!(Locale {
    En => "en",
    Sh => "sh",
    Nd => "nd",
});

str_enum!(Platform {
    Youtube => "youtube",
    Tiktok => "tiktok",
    Instagram => "instagram",
});

impl Trimester {
    /// Derive the trimester from a week count.
    ///
    /// Single canonical rule for the whole app: weeks 1-13 first,
    /// 14-27 second, 28+ third.
    pub fn from_weeks(weeks: u8) -> Self {
        if weeks <= 13 {
            Trimester::First
        } else if weeks <= 27 {
            Trimester::Second
        } else {
            Trimester::Third
        }
    }

    /// Ordinal (1-3) for display strings like "Trimester 2".
    pub fn ordinal(&self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips() {
        assert_eq!(Role::from_str("doctor").unwrap(), Role::Doctor);
        assert_eq!(Role::Patient.as_str(), "patient");
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert!(Channel::from_str("nurses").is_err());
    }

    #[test]
    fn trimester_boundaries() {
        assert_eq!(Trimester::from_weeks(1), Trimester::First);
        assert_eq!(Trimester::from_weeks(13), Trimester::First);
        assert_eq!(Trimester::from_weeks(14), Trimester::Second);
        assert_eq!(Trimester::from_weeks(27), Trimester::Second);
        assert_eq!(Trimester::from_weeks(28), Trimester::Third);
        assert_eq!(Trimester::from_weeks(42), Trimester::Third);
    }

    #[test]
    fn trimester_ordinals() {
        assert_eq!(Trimester::First.ordinal(), 1);
        assert_eq!(Trimester::Third.ordinal(), 3);
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&Trimester::Second).unwrap();
        assert_eq!(json, "\"second\"");
        let back: Mood = serde_json::from_str("\"unwell\"").unwrap();
        assert_eq!(back, Mood::Unwell);
    }
}
