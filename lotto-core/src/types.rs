use crate::error::{LottoError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TICKET_NUMBER_LEN: usize = 6;

/// A six digit ticket or winning number. Leading zeros are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketNumber(String);

impl TicketNumber {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() == TICKET_NUMBER_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(LottoError::InvalidTicketNumber(raw.to_string()))
        }
    }

    /// Zero-pads `value` to six digits. Values above 999999 are rejected.
    pub fn from_value(value: u32) -> Result<Self> {
        if value > 999_999 {
            return Err(LottoError::InvalidTicketNumber(value.to_string()));
        }
        Ok(Self(format!("{:06}", value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> u32 {
        // digits only, checked at construction
        self.0
            .bytes()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    pub fn first_three(&self) -> &str {
        &self.0[..3]
    }

    pub fn last_three(&self) -> &str {
        &self.0[3..]
    }

    pub fn last_two(&self) -> &str {
        &self.0[4..]
    }
}

impl FromStr for TicketNumber {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TicketNumber {
    type Error = LottoError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TicketNumber> for String {
    fn from(number: TicketNumber) -> Self {
        number.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

impl FromStr for Role {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(LottoError::config(format!(
                "Invalid role: {}. Supported roles: user, admin",
                s
            ))),
        }
    }
}

/// Identity handed to the engine by whatever authenticated the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u64,
    pub role: Role,
}

impl Actor {
    pub fn new(id: u64, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require(&self, role: Role) -> Result<()> {
        if role == Role::Admin && !self.is_admin() {
            return Err(LottoError::Unauthorized {
                actor_id: self.id,
                required: role,
                actual: self.role,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Won,
    Lost,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Pending => f.write_str("pending"),
            TicketStatus::Won => f.write_str("won"),
            TicketStatus::Lost => f.write_str("lost"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TicketRecord")]
pub struct Ticket {
    id: u64,
    user_id: u64,
    number: TicketNumber,
    draw_date: NaiveDate,
    status: TicketStatus,
    prize: u64,
    /// Draw that wrote the current status, `None` while pending.
    settled_by: Option<u64>,
    created_at: DateTime<Utc>,
}

/// Wire form of a [`Ticket`], checked before it becomes one.
#[derive(Deserialize)]
struct TicketRecord {
    id: u64,
    user_id: u64,
    number: TicketNumber,
    draw_date: NaiveDate,
    status: TicketStatus,
    prize: u64,
    #[serde(default)]
    settled_by: Option<u64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<TicketRecord> for Ticket {
    type Error = LottoError;

    fn try_from(record: TicketRecord) -> Result<Self> {
        let consistent = match record.status {
            TicketStatus::Pending => record.prize == 0 && record.settled_by.is_none(),
            TicketStatus::Lost => record.prize == 0 && record.settled_by.is_some(),
            TicketStatus::Won => record.prize > 0 && record.settled_by.is_some(),
        };
        if !consistent {
            return Err(LottoError::InvalidRecord(format!(
                "ticket {} is {} with prize {} settled by {:?}",
                record.id, record.status, record.prize, record.settled_by
            )));
        }

        Ok(Self {
            id: record.id,
            user_id: record.user_id,
            number: record.number,
            draw_date: record.draw_date,
            status: record.status,
            prize: record.prize,
            settled_by: record.settled_by,
            created_at: record.created_at,
        })
    }
}

impl Ticket {
    pub(crate) fn new(id: u64, user_id: u64, number: TicketNumber, draw_date: NaiveDate) -> Self {
        Self {
            id,
            user_id,
            number,
            draw_date,
            status: TicketStatus::Pending,
            prize: 0,
            settled_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn number(&self) -> &TicketNumber {
        &self.number
    }

    pub fn draw_date(&self) -> NaiveDate {
        self.draw_date
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn prize(&self) -> u64 {
        self.prize
    }

    pub fn settled_by(&self) -> Option<u64> {
        self.settled_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_pending(&self) -> bool {
        self.status == TicketStatus::Pending
    }

    pub(crate) fn settle(&mut self, draw_id: u64, status: TicketStatus, prize: u64) {
        self.status = status;
        self.prize = prize;
        self.settled_by = Some(draw_id);
    }
}

/// A draw result. The prefix/suffix fields are cached at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DrawRecord")]
pub struct Draw {
    id: u64,
    draw_date: NaiveDate,
    winning_number: TicketNumber,
    first_three: String,
    last_three: String,
    last_two: String,
    created_at: DateTime<Utc>,
}

/// Wire form of a [`Draw`]. The cached parts must agree with the winning number.
#[derive(Deserialize)]
struct DrawRecord {
    id: u64,
    draw_date: NaiveDate,
    winning_number: TicketNumber,
    first_three: String,
    last_three: String,
    last_two: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DrawRecord> for Draw {
    type Error = LottoError;

    fn try_from(record: DrawRecord) -> Result<Self> {
        let mut draw = Draw::new(record.id, record.draw_date, record.winning_number);
        if draw.first_three != record.first_three
            || draw.last_three != record.last_three
            || draw.last_two != record.last_two
        {
            return Err(LottoError::InvalidRecord(format!(
                "draw {} caches {}/{}/{} for winning number {}",
                record.id,
                record.first_three,
                record.last_three,
                record.last_two,
                draw.winning_number
            )));
        }

        draw.created_at = record.created_at;
        Ok(draw)
    }
}

impl Draw {
    pub fn new(id: u64, draw_date: NaiveDate, winning_number: TicketNumber) -> Self {
        Self {
            id,
            draw_date,
            first_three: winning_number.first_three().to_string(),
            last_three: winning_number.last_three().to_string(),
            last_two: winning_number.last_two().to_string(),
            winning_number,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn draw_date(&self) -> NaiveDate {
        self.draw_date
    }

    pub fn winning_number(&self) -> &TicketNumber {
        &self.winning_number
    }

    pub fn first_three(&self) -> &str {
        &self.first_three
    }

    pub fn last_three(&self) -> &str {
        &self.last_three
    }

    pub fn last_two(&self) -> &str {
        &self.last_two
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
