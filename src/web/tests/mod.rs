//! Unit tests for the HTTP boundary.
//!
//! Payload mapping and validation rules are exercised as pure functions;
//! error rendering is checked against the serialized problem-details body.
