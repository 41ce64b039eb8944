//! Load (shipment) record as surfaced by the freight board.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{DotNumber, MatchId, Place, PostingId, TimeWindow};

use super::driver_record::{Contact, ServiceFlags};
use super::equipment::EquipmentType;

/// How a posted board rate is denominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateBasis {
    /// Total amount for the whole trip.
    Flat,
    /// Amount per loaded mile.
    PerMile,
}

/// A rate posted on the load board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRate {
    /// USD amount.
    pub amount_usd: Decimal,
    /// Denomination of the amount.
    pub basis: RateBasis,
}

/// Rate information attached to a load, in order of preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateInfo {
    /// Board-estimated rate per mile, the preferred signal.
    pub estimated_rate_per_mile: Option<Decimal>,
    /// Rate posted by the broker, flat or per-mile.
    pub board_rate: Option<BoardRate>,
}

/// Full or partial trailer utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FullPartial {
    /// Whole trailer.
    Full,
    /// Shared trailer.
    Partial,
}

/// Broker identity and credit posture on a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerInfo {
    /// Broker company name.
    pub company_name: Option<String>,
    /// Broker DOT number.
    pub dot_number: Option<DotNumber>,
    /// Broker MC number.
    pub mc_number: Option<u64>,
    /// Contact details.
    pub contact: Contact,
    /// Board credit score.
    pub credit_score: Option<u32>,
    /// Average days to pay.
    pub days_to_pay: Option<u32>,
}

/// A candidate load, normalized from a shipment match.
///
/// `pickup` is `None` when the posting carried no parseable pickup window;
/// such loads cannot be safely ranked against a driver's availability and
/// are excluded by the filter pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRecord {
    /// Board match identifier.
    pub match_id: MatchId,
    /// Shipper/broker reference id.
    pub reference_id: Option<String>,
    /// Pickup location.
    pub origin: Place,
    /// Delivery location; `None` when the posting has no resolvable state.
    pub destination: Option<Place>,
    /// Loaded trip distance in miles.
    pub trip_miles: Option<u32>,
    /// Deadhead to the pickup, in miles.
    pub origin_deadhead_miles: Option<u32>,
    /// Rate signals.
    pub rate: RateInfo,
    /// Required equipment.
    pub equipment: EquipmentType,
    /// Full or partial load.
    pub full_partial: Option<FullPartial>,
    /// Maximum weight in pounds.
    pub max_weight_pounds: Option<u32>,
    /// Maximum length in feet.
    pub max_length_feet: Option<u32>,
    /// Commodity description.
    pub commodity: Option<String>,
    /// Pickup window, if parseable.
    pub pickup: Option<TimeWindow>,
    /// Posting broker.
    pub broker: BrokerInfo,
    /// Service capabilities.
    pub service_flags: ServiceFlags,
    /// Free-form comments.
    pub comments: Option<String>,
    /// Posting identifier.
    pub posting_id: Option<PostingId>,
}

impl LoadRecord {
    /// Destination state code, when the posting resolves to one.
    #[must_use]
    pub fn destination_state(&self) -> Option<&str> {
        self.destination.as_ref().map(|place| place.state.as_str())
    }

    /// Trip miles plus origin deadhead.
    #[must_use]
    pub fn total_miles(&self) -> u32 {
        self.trip_miles.unwrap_or(0) + self.origin_deadhead_miles.unwrap_or(0)
    }
}
