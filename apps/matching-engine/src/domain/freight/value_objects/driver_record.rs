//! Driver (capacity) record as surfaced by the freight board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::{DotNumber, MatchId, Place, PostingId, TimeWindow};

use super::equipment::EquipmentType;

/// Service capabilities advertised on a posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFlags {
    /// Can be booked directly through the board.
    pub bookable: bool,
    /// Rate is open to negotiation.
    pub negotiable: bool,
    /// Eligible for invoice factoring.
    pub factorable: bool,
    /// Covered by board assurance.
    pub assurable: bool,
    /// Supports shipment tracking.
    pub trackable: bool,
}

/// Available trailer capacity on a capacity posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckCapacity {
    /// Available length in feet.
    pub length_feet: Option<u32>,
    /// Available weight in pounds.
    pub weight_pounds: Option<u32>,
}

/// Contact details from a posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number.
    pub phone: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

/// A truck/driver available for hire, normalized from a capacity match.
///
/// Produced by the freight-board adapter; the filter pipeline annotates it
/// with fleet data before it is surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRecord {
    /// Board match identifier.
    pub match_id: MatchId,
    /// Carrier company name.
    pub company_name: Option<String>,
    /// Carrier DOT number, when posted.
    pub dot_number: Option<DotNumber>,
    /// Carrier MC number, when posted.
    pub mc_number: Option<u64>,
    /// Equipment on offer.
    pub equipment: EquipmentType,
    /// Current location.
    pub origin: Place,
    /// Preferred destination; `None` means open.
    pub destination: Option<Place>,
    /// Availability window.
    pub availability: TimeWindow,
    /// Trailer capacity.
    pub capacity: TruckCapacity,
    /// Service capabilities.
    pub service_flags: ServiceFlags,
    /// Deadhead from the searched origin, in miles.
    pub origin_deadhead_miles: Option<u32>,
    /// Poster contact details.
    pub contact: Contact,
    /// Free-form poster comments.
    pub comments: Option<String>,
    /// Posting identifier.
    pub posting_id: Option<PostingId>,
    /// When the posting expires.
    pub posting_expires: Option<DateTime<Utc>>,
}
