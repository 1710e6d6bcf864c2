//! Verb sets shared by the generated actions.

use wayfinder_routes::HttpVerb;

pub const GET_HEAD: &[HttpVerb] = &[HttpVerb::Get, HttpVerb::Head];
pub const POST: &[HttpVerb] = &[HttpVerb::Post];
pub const PUT_PATCH: &[HttpVerb] = &[HttpVerb::Put, HttpVerb::Patch];
pub const PATCH: &[HttpVerb] = &[HttpVerb::Patch];
pub const DELETE: &[HttpVerb] = &[HttpVerb::Delete];
