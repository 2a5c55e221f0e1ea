use serde::{Deserialize, Serialize};

use crate::history::{RatingRecord, SwingSummary};
use crate::roster::MemberId;

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeInput {
    pub member_id: MemberId,
    pub won: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentRequest {
    pub text: String,
    pub reference: MemberId,
    /// Flags for the current reference only
    #[serde(default)]
    pub outcomes: Vec<OutcomeInput>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameItem {
    pub member_id: MemberId,
    pub name: String,
}

#[derive(Serialize)]
pub struct NamesResponse {
    pub names: Vec<NameItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetailResponse {
    pub member_id: MemberId,
    pub records: Vec<RatingRecord>,
    pub summary: SwingSummary,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
