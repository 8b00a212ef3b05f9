//! Shared domain types exchanged with the VetClinic backend.
//!
//! These are passive wire shapes - the backend is the source of truth and is
//! not part of this repository. The frontend only serializes/deserializes
//! them; no behavior is attached. Field names follow the backend's camelCase
//! JSON convention.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Response envelopes
// =============================================================================

/// Generic success/data/error envelope used by every backend endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Paginated list envelope.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

// =============================================================================
// Users and owners
// =============================================================================

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Veterinarian,
    #[default]
    Receptionist,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::Veterinarian => "veterinarian",
            UserRole::Receptionist => "receptionist",
        };
        write!(f, "{}", s)
    }
}

/// A clinic system user (staff member with a login).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// A pet owner (client of the clinic, no login).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

// =============================================================================
// Pets and medical history
// =============================================================================

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PetSpecies {
    #[default]
    Dog,
    Cat,
    Bird,
    Rabbit,
    Reptile,
    Other,
}

impl fmt::Display for PetSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PetSpecies::Dog => "dog",
            PetSpecies::Cat => "cat",
            PetSpecies::Bird => "bird",
            PetSpecies::Rabbit => "rabbit",
            PetSpecies::Reptile => "reptile",
            PetSpecies::Other => "other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: PetSpecies,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    pub owner_id: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vaccine {
    pub id: String,
    pub name: String,
    pub applied_at: NaiveDate,
    #[serde(default)]
    pub next_due: Option<NaiveDate>,
    #[serde(default)]
    pub batch: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct XRay {
    pub id: String,
    pub taken_at: DateTime<Utc>,
    pub body_part: String,
    pub image_url: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One visit's medical record, with attached vaccines and radiographs.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub pet_id: String,
    pub veterinarian_id: String,
    pub date: DateTime<Utc>,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub vaccines: Vec<Vaccine>,
    #[serde(default)]
    pub xrays: Vec<XRay>,
}

// =============================================================================
// Appointments
// =============================================================================

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Missed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Missed => "missed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub pet_id: String,
    pub owner_id: String,
    pub veterinarian_id: String,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default = "default_appointment_minutes")]
    pub duration_minutes: u32,
    pub reason: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_appointment_minutes() -> u32 {
    30
}

// =============================================================================
// Inventory
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    pub cost: f64,
    pub stock: i64,
    #[serde(default)]
    pub min_stock: i64,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub expires_at: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockMovementKind {
    #[default]
    Purchase,
    Sale,
    Adjustment,
    Expiry,
    Return,
}

/// Inventory ledger entry. Quantity is signed: inbound positive, outbound
/// negative.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    pub product_id: String,
    pub kind: StockMovementKind,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

// =============================================================================
// Sales
// =============================================================================

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub items: Vec<SaleItem>,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub cashier_id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One cash register session (open to close).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashRegister {
    pub id: String,
    pub opened_by: String,
    pub opened_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    pub opening_balance: f64,
    #[serde(default)]
    pub closing_balance: Option<f64>,
    #[serde(default)]
    pub total_sales: f64,
}

// =============================================================================
// Reports
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub total_revenue: f64,
    pub sale_count: u64,
    pub average_ticket: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub product_count: u64,
    pub low_stock_count: u64,
    pub total_stock_value: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentsReport {
    pub scheduled: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub missed: u64,
}

/// Aggregated report for a date range, as returned by the backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub sales: SalesReport,
    pub inventory: InventoryReport,
    pub appointments: AppointmentsReport,
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
    Whatsapp,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub user_id: String,
    #[serde(default)]
    pub appointment_reminders: bool,
    #[serde(default)]
    pub vaccine_reminders: bool,
    #[serde(default)]
    pub low_stock_alerts: bool,
    #[serde(default)]
    pub channels: Vec<NotificationChannel>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    #[default]
    Pending,
    Sent,
    Failed,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLog {
    pub id: String,
    pub user_id: String,
    pub channel: NotificationChannel,
    pub subject: String,
    #[serde(default)]
    pub body: Option<String>,
    pub status: NotificationStatus,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_envelope_field_names() {
        let page: Paginated<Pet> = Paginated {
            items: vec![],
            total: 41,
            page: 3,
            limit: 20,
            total_pages: 3,
        };
        let json = serde_json::to_string(&page).unwrap();
        // The backend's casing is part of the contract.
        assert!(json.contains("\"totalPages\":3"));
        assert!(json.contains("\"total\":41"));
    }

    #[test]
    fn test_api_response_error_shape() {
        let resp: ApiResponse<Pet> = ApiResponse {
            success: false,
            data: None,
            error: Some("pet not found".into()),
            message: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"pet not found"}"#);

        let parsed: ApiResponse<Pet> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, resp);
    }

    #[test]
    fn test_pet_deserializes_from_backend_json() {
        let json = r#"{
            "id": "pet-7",
            "name": "Luna",
            "species": "cat",
            "birthDate": "2021-03-14",
            "weightKg": 4.2,
            "ownerId": "owner-3"
        }"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.species, PetSpecies::Cat);
        assert_eq!(pet.birth_date.unwrap().to_string(), "2021-03-14");
        assert!(pet.breed.is_none());
        assert!(pet.photo_url.is_none());
    }

    #[test]
    fn test_status_enums_use_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Veterinarian).unwrap(),
            "\"veterinarian\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Transfer).unwrap(),
            "\"transfer\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationChannel::Whatsapp).unwrap(),
            "\"whatsapp\""
        );
    }

    #[test]
    fn test_appointment_defaults_duration() {
        let json = r#"{
            "id": "apt-1",
            "petId": "pet-7",
            "ownerId": "owner-3",
            "veterinarianId": "user-2",
            "scheduledFor": "2026-08-06T15:30:00Z",
            "reason": "vaccination",
            "status": "confirmed"
        }"#;
        let apt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(apt.duration_minutes, 30);
        assert_eq!(apt.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_report_data_round_trip() {
        let report = ReportData {
            from: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(),
            sales: SalesReport {
                total_revenue: 15_230.5,
                sale_count: 204,
                average_ticket: 74.66,
            },
            inventory: InventoryReport {
                product_count: 310,
                low_stock_count: 12,
                total_stock_value: 48_900.0,
            },
            appointments: AppointmentsReport {
                scheduled: 180,
                completed: 162,
                cancelled: 14,
                missed: 4,
            },
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"totalRevenue\""));
        assert!(json.contains("\"lowStockCount\""));
        let parsed: ReportData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
