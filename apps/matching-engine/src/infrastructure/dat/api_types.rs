//! Wire types for the DAT identity and freight search APIs.
//!
//! Everything in this module mirrors the provider's JSON shapes. The
//! boundary rule: raw, stringly-typed, or optional wire values are coerced
//! here and nowhere else; domain records never carry untyped data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::freight::{
    BoardRate, BrokerInfo, Contact, DriverRecord, EquipmentType, FullPartial, LoadRecord,
    RateBasis, RateInfo, ServiceFlags, TruckCapacity,
};
use crate::domain::shared::{DotNumber, MatchId, Place, PostingId, TimeWindow};

// ---------------------------------------------------------------------------
// Identity API
// ---------------------------------------------------------------------------

/// Organization token request.
#[derive(Debug, Serialize)]
pub struct OrgTokenRequest<'a> {
    /// Organization username.
    pub username: &'a str,
    /// Organization password.
    pub password: &'a str,
}

/// User token request, sent with the organization bearer.
#[derive(Debug, Serialize)]
pub struct UserTokenRequest<'a> {
    /// Service-account user the token is issued for.
    pub username: &'a str,
}

/// Token response for both authentication steps.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// The issued bearer token.
    pub access_token: String,
    /// Validity in seconds; the user step reports 900 (15 minutes).
    #[serde(default)]
    pub expires_in: Option<u64>,
}

// ---------------------------------------------------------------------------
// Search criteria (requests)
// ---------------------------------------------------------------------------

/// Asset class a search targets.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    /// Capacity (drivers).
    Truck,
    /// Loads.
    Shipment,
}

/// Equipment restriction on a lane.
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentCriteria {
    /// Equipment codes.
    pub types: Vec<String>,
}

/// City-level lane endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceCriteria {
    /// City name.
    pub city: String,
    /// State code.
    pub state_prov: String,
}

/// Area-level lane endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AreaCriteria {
    /// State codes.
    pub states: Vec<String>,
}

/// Marker for an open (unconstrained) lane endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpenCriteria {}

/// One end of a searched lane.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LaneEnd {
    /// Specific city.
    Place(PlaceCriteria),
    /// One or more states.
    Area(AreaCriteria),
    /// Anywhere.
    Open(OpenCriteria),
}

impl LaneEnd {
    /// An unconstrained endpoint.
    #[must_use]
    pub fn open() -> Self {
        Self::Open(OpenCriteria::default())
    }
}

/// Lane restriction for a search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneCriteria {
    /// Asset class.
    pub asset_type: AssetType,
    /// Equipment restriction.
    pub equipment: EquipmentCriteria,
    /// Origin endpoint, when constrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<LaneEnd>,
    /// Destination endpoint.
    pub destination: LaneEnd,
}

/// Posting audiences included in a search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    /// Include public load-board postings.
    pub include_load_board: bool,
    /// Include private-network postings.
    pub include_private_network: bool,
}

impl Default for Audience {
    fn default() -> Self {
        Self {
            include_load_board: true,
            include_private_network: true,
        }
    }
}

/// Availability window restriction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityCriteria {
    /// Earliest availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_when: Option<DateTime<Utc>>,
    /// Latest availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_when: Option<DateTime<Utc>>,
}

/// Full search criteria.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Lane restriction.
    pub lane: LaneCriteria,
    /// Maximum posting age in minutes.
    pub max_age_minutes: u32,
    /// Availability restriction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilityCriteria>,
    /// Maximum origin deadhead in miles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_origin_deadhead_miles: Option<u32>,
    /// Audiences to include.
    pub audience: Audience,
    /// Counts-only searches skip match payloads.
    pub counts_only: bool,
    /// Include trucks with open destinations (capacity searches).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_open_destination_trucks: Option<bool>,
}

/// Envelope for query creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateQueryRequest {
    /// The search criteria.
    pub criteria: SearchCriteria,
}

// ---------------------------------------------------------------------------
// Search results (responses)
// ---------------------------------------------------------------------------

/// Response to query creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQueryResponse {
    /// Handle for fetching matches.
    #[serde(default)]
    pub query_id: Option<String>,
}

/// Match counts per audience bucket.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCounts {
    /// Public matches.
    #[serde(default)]
    pub normal: u32,
    /// Preferred-network matches.
    #[serde(default)]
    pub preferred: u32,
    /// Private-network matches.
    #[serde(default)]
    pub private_network: u32,
}

impl MatchCounts {
    /// Total matches across all buckets.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.normal + self.preferred + self.private_network
    }
}

/// Response to a match fetch.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMatchesResponse {
    /// Returned matches.
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    /// Total counts, also present on counts-only fetches.
    #[serde(default)]
    pub match_counts: MatchCounts,
}

/// A wire value that may arrive as a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Numeric form.
    Number(u64),
    /// String form (possibly non-numeric).
    Text(String),
}

impl RawId {
    /// Coerce to a DOT number, dropping absent markers.
    #[must_use]
    pub fn to_dot_number(&self) -> Option<DotNumber> {
        match self {
            Self::Number(n) => DotNumber::from_numeric(*n),
            Self::Text(s) => DotNumber::from_raw(s),
        }
    }

    /// Coerce to an integer, dropping non-numeric strings.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// DOT/MC identifiers on a posting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterDotIds {
    /// DOT number.
    #[serde(default)]
    pub dot_number: Option<RawId>,
    /// Carrier MC number.
    #[serde(default)]
    pub carrier_mc_number: Option<RawId>,
    /// Broker MC number.
    #[serde(default)]
    pub broker_mc_number: Option<RawId>,
}

/// Contact block on a posting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireContact {
    /// Phone, preferred field.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Phone, legacy field.
    #[serde(default)]
    pub phone: Option<String>,
    /// Email.
    #[serde(default)]
    pub email: Option<String>,
}

impl WireContact {
    fn into_contact(self) -> Contact {
        Contact {
            phone: self.phone_number.or(self.phone),
            email: self.email,
        }
    }
}

/// Broker credit block.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCredit {
    /// Board credit score.
    #[serde(default)]
    pub credit_score: Option<u32>,
    /// Average days to pay.
    #[serde(default)]
    pub days_to_pay: Option<u32>,
}

/// Poster identity block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterInfo {
    /// Company name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Contact details.
    #[serde(default)]
    pub contact: WireContact,
    /// Credit posture (brokers).
    #[serde(default)]
    pub credit: WireCredit,
}

/// Wire place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePlace {
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State code.
    #[serde(default)]
    pub state_prov: Option<String>,
}

/// Wire area.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireArea {
    /// State codes.
    #[serde(default)]
    pub states: Vec<String>,
}

/// Wire lane endpoint: place, area, or open.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireLaneEnd {
    /// City-level endpoint.
    #[serde(default)]
    pub place: Option<WirePlace>,
    /// Area-level endpoint.
    #[serde(default)]
    pub area: Option<WireArea>,
}

impl WireLaneEnd {
    /// Resolve to a domain place, preferring city over area.
    fn to_place(&self) -> Option<Place> {
        if let Some(place) = &self.place
            && let Some(state) = &place.state_prov
        {
            return Some(Place {
                city: place.city.clone(),
                state: state.clone(),
            });
        }
        self.area
            .as_ref()
            .and_then(|area| area.states.first())
            .map(|state| Place::state_only(state.clone()))
    }
}

/// Mileage wrapper (`{"miles": 123}`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Mileage {
    /// Miles.
    #[serde(default)]
    pub miles: Option<f64>,
}

impl Mileage {
    fn to_miles(self) -> Option<u32> {
        self.miles.filter(|m| m.is_finite() && *m >= 0.0).map(|m| m.round() as u32)
    }
}

/// Shipment capacity block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireShipmentCapacity {
    /// Full/partial marker.
    #[serde(default)]
    pub full_partial: Option<String>,
    /// Maximum weight.
    #[serde(default)]
    pub maximum_weight_pounds: Option<f64>,
    /// Maximum length.
    #[serde(default)]
    pub maximum_length_feet: Option<f64>,
}

/// Capacity wrapper on asset info.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireCapacity {
    /// Shipment capacity details.
    #[serde(default)]
    pub shipment: Option<WireShipmentCapacity>,
}

/// Matching asset details shared by truck and shipment matches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingAssetInfo {
    /// Origin place.
    #[serde(default)]
    pub origin: Option<WirePlace>,
    /// Destination endpoint.
    #[serde(default)]
    pub destination: Option<WireLaneEnd>,
    /// Equipment code.
    #[serde(default)]
    pub equipment_type: Option<String>,
    /// Capacity details.
    #[serde(default)]
    pub capacity: Option<WireCapacity>,
    /// Commodity description.
    #[serde(default)]
    pub commodity: Option<String>,
    /// Shipper reference id.
    #[serde(default)]
    pub reference_id: Option<String>,
}

/// Availability window, wire form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAvailability {
    /// Earliest instant, RFC 3339.
    #[serde(default)]
    pub earliest_when: Option<String>,
    /// Latest instant, RFC 3339.
    #[serde(default)]
    pub latest_when: Option<String>,
}

impl WireAvailability {
    /// Parse into a window.
    ///
    /// `None` when no bound is present or any present bound fails to
    /// parse. A malformed window must not pass as a permissive one.
    #[must_use]
    pub fn to_window(&self) -> Option<TimeWindow> {
        let earliest = match &self.earliest_when {
            Some(raw) => Some(parse_instant(raw)?),
            None => None,
        };
        let latest = match &self.latest_when {
            Some(raw) => Some(parse_instant(raw)?),
            None => None,
        };
        if earliest.is_none() && latest.is_none() {
            return None;
        }
        Some(TimeWindow::new(earliest, latest))
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Load-board rate block.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRate {
    /// USD amount.
    #[serde(default)]
    pub rate_usd: Option<Decimal>,
    /// Denomination.
    #[serde(default)]
    pub basis: Option<RateBasis>,
}

/// Rate info wrapper.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLoadBoardRateInfo {
    /// Rate on non-bookable postings.
    #[serde(default)]
    pub non_bookable: Option<WireRate>,
    /// Rate on bookable postings.
    #[serde(default)]
    pub bookable: Option<WireRate>,
}

impl WireLoadBoardRateInfo {
    fn to_board_rate(self) -> Option<BoardRate> {
        let rate = self.non_bookable.or(self.bookable)?;
        Some(BoardRate {
            amount_usd: rate.rate_usd?,
            basis: rate.basis?,
        })
    }
}

/// One search match, truck or shipment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Match identifier.
    #[serde(default)]
    pub match_id: Option<String>,
    /// Asset details.
    #[serde(default)]
    pub matching_asset_info: Option<MatchingAssetInfo>,
    /// Poster identity.
    #[serde(default)]
    pub poster_info: Option<PosterInfo>,
    /// Poster DOT/MC identifiers.
    #[serde(default)]
    pub poster_dot_ids: Option<PosterDotIds>,
    /// Availability / pickup window.
    #[serde(default)]
    pub availability: Option<WireAvailability>,
    /// Available trailer length (capacity matches).
    #[serde(default)]
    pub available_length_feet: Option<f64>,
    /// Available trailer weight (capacity matches).
    #[serde(default)]
    pub available_weight_pounds: Option<f64>,
    /// Bookable flag.
    #[serde(default)]
    pub is_bookable: bool,
    /// Negotiable flag.
    #[serde(default)]
    pub is_negotiable: bool,
    /// Factorable flag.
    #[serde(default)]
    pub is_factorable: bool,
    /// Assurable flag.
    #[serde(default)]
    pub is_assurable: bool,
    /// Trackable flag.
    #[serde(default)]
    pub is_trackable: bool,
    /// Deadhead from the searched origin.
    #[serde(default)]
    pub origin_deadhead_miles: Option<Mileage>,
    /// Deadhead, legacy field name.
    #[serde(default)]
    pub origin_deadhead: Option<Mileage>,
    /// Loaded trip length (shipment matches).
    #[serde(default)]
    pub trip_length: Option<Mileage>,
    /// Board-estimated rate per mile (shipment matches).
    #[serde(default)]
    pub estimated_rate_per_mile: Option<Decimal>,
    /// Posted rate info (shipment matches).
    #[serde(default)]
    pub load_board_rate_info: Option<WireLoadBoardRateInfo>,
    /// Maximum weight, top-level fallback.
    #[serde(default)]
    pub maximum_weight_pounds: Option<f64>,
    /// Maximum length, top-level fallback.
    #[serde(default)]
    pub maximum_length_feet: Option<f64>,
    /// Poster comments.
    #[serde(default)]
    pub comments: Option<String>,
    /// Posting identifier.
    #[serde(default)]
    pub posting_id: Option<String>,
    /// Posting expiry, RFC 3339.
    #[serde(default)]
    pub posting_expires_when: Option<String>,
}

impl MatchRecord {
    fn service_flags(&self) -> ServiceFlags {
        ServiceFlags {
            bookable: self.is_bookable,
            negotiable: self.is_negotiable,
            factorable: self.is_factorable,
            assurable: self.is_assurable,
            trackable: self.is_trackable,
        }
    }

    fn deadhead_miles(&self) -> Option<u32> {
        self.origin_deadhead_miles
            .and_then(Mileage::to_miles)
            .or_else(|| self.origin_deadhead.and_then(Mileage::to_miles))
    }

    /// Convert a capacity match into a driver record.
    #[must_use]
    pub fn into_driver_record(self) -> DriverRecord {
        let service_flags = self.service_flags();
        let deadhead = self.deadhead_miles();
        let asset = self.matching_asset_info.unwrap_or_default();
        let poster = self.poster_info.unwrap_or_default();
        let dot_ids = self.poster_dot_ids.unwrap_or_default();

        DriverRecord {
            match_id: self.match_id.map_or_else(MatchId::generate, MatchId::new),
            company_name: poster.company_name,
            dot_number: dot_ids.dot_number.as_ref().and_then(RawId::to_dot_number),
            mc_number: dot_ids.carrier_mc_number.as_ref().and_then(RawId::to_u64),
            equipment: asset
                .equipment_type
                .as_deref()
                .map_or(EquipmentType::Van, EquipmentType::from_code),
            origin: asset
                .origin
                .as_ref()
                .and_then(|p| {
                    p.state_prov.as_ref().map(|state| Place {
                        city: p.city.clone(),
                        state: state.clone(),
                    })
                })
                .unwrap_or_else(|| Place::state_only(String::new())),
            destination: asset.destination.as_ref().and_then(WireLaneEnd::to_place),
            availability: self
                .availability
                .as_ref()
                .and_then(WireAvailability::to_window)
                .unwrap_or_else(|| TimeWindow::new(None, None)),
            capacity: TruckCapacity {
                length_feet: self.available_length_feet.map(|v| v.round() as u32),
                weight_pounds: self.available_weight_pounds.map(|v| v.round() as u32),
            },
            service_flags,
            origin_deadhead_miles: deadhead,
            contact: poster.contact.into_contact(),
            comments: self.comments,
            posting_id: self.posting_id.map(PostingId::new),
            posting_expires: self.posting_expires_when.as_deref().and_then(parse_instant),
        }
    }

    /// Convert a shipment match into a load record.
    #[must_use]
    pub fn into_load_record(self) -> LoadRecord {
        let service_flags = self.service_flags();
        let deadhead = self.deadhead_miles();
        let asset = self.matching_asset_info.unwrap_or_default();
        let poster = self.poster_info.unwrap_or_default();
        let dot_ids = self.poster_dot_ids.unwrap_or_default();
        let shipment = asset
            .capacity
            .as_ref()
            .and_then(|c| c.shipment.clone())
            .unwrap_or_default();

        let full_partial = shipment.full_partial.as_deref().and_then(|fp| match fp {
            "FULL" => Some(FullPartial::Full),
            "PARTIAL" => Some(FullPartial::Partial),
            _ => None,
        });

        LoadRecord {
            match_id: self.match_id.map_or_else(MatchId::generate, MatchId::new),
            reference_id: asset.reference_id,
            origin: asset
                .origin
                .as_ref()
                .and_then(|p| {
                    p.state_prov.as_ref().map(|state| Place {
                        city: p.city.clone(),
                        state: state.clone(),
                    })
                })
                .unwrap_or_else(|| Place::state_only(String::new())),
            destination: asset.destination.as_ref().and_then(WireLaneEnd::to_place),
            trip_miles: self.trip_length.and_then(Mileage::to_miles),
            origin_deadhead_miles: deadhead,
            rate: RateInfo {
                estimated_rate_per_mile: self.estimated_rate_per_mile,
                board_rate: self
                    .load_board_rate_info
                    .and_then(WireLoadBoardRateInfo::to_board_rate),
            },
            equipment: asset
                .equipment_type
                .as_deref()
                .map_or(EquipmentType::Van, EquipmentType::from_code),
            full_partial,
            max_weight_pounds: shipment
                .maximum_weight_pounds
                .or(self.maximum_weight_pounds)
                .map(|v| v.round() as u32),
            max_length_feet: shipment
                .maximum_length_feet
                .or(self.maximum_length_feet)
                .map(|v| v.round() as u32),
            commodity: asset.commodity,
            pickup: self
                .availability
                .as_ref()
                .and_then(WireAvailability::to_window),
            broker: BrokerInfo {
                company_name: poster.company_name,
                dot_number: dot_ids.dot_number.as_ref().and_then(RawId::to_dot_number),
                mc_number: dot_ids
                    .broker_mc_number
                    .as_ref()
                    .or(dot_ids.carrier_mc_number.as_ref())
                    .and_then(RawId::to_u64),
                contact: poster.contact.into_contact(),
                credit_score: poster.credit.credit_score,
                days_to_pay: poster.credit.days_to_pay,
            },
            service_flags,
            comments: self.comments,
            posting_id: self.posting_id.map(PostingId::new),
        }
    }
}
