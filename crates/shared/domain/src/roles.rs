use bitflags::bitflags;
use serde::de::{Deserialize, Deserializer, Error};
use serde::ser::{Serialize, SerializeSeq, Serializer};

bitflags! {
    /// The band positions a color may legally occupy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BandRoles: u8 {
        const DIGIT = 1 << 0;
        const EXPONENT = 1 << 1;
        const TOLERANCE = 1 << 2;
    }
}

impl BandRoles {
    /// Lower-case role names, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        self.iter().filter_map(Self::name_of)
    }

    const fn name_of(role: Self) -> Option<&'static str> {
        match role.bits() {
            1 => Some("digit"),
            2 => Some("exponent"),
            4 => Some("tolerance"),
            _ => None,
        }
    }
}

impl From<&str> for BandRoles {
    fn from(s: &str) -> Self {
        match s {
            "digit" => Self::DIGIT,
            "exponent" => Self::EXPONENT,
            "tolerance" => Self::TOLERANCE,
            _ => Self::empty(),
        }
    }
}

/// Serialized as a list of role names (`["digit", "exponent"]`).
impl Serialize for BandRoles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.iter().count()))?;
        for name in self.names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for BandRoles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?.iter().try_fold(Self::empty(), |roles, name| {
            match Self::from(name.as_str()) {
                role if role.is_empty() => Err(D::Error::custom(format!("unknown band role `{name}`"))),
                role => Ok(roles | role),
            }
        })
    }
}
