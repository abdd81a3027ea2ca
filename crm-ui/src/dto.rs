//! Mock rows rendered by the presentational views. Real rows come from the
//! remote store; these keep the demo backend usable on its own.

use crm_core::selection::EmployeeRecord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: String,
    pub name: String,
    pub country: String,
    pub industry: String,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: String,
    pub company_id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl EmployeeDto {
    pub fn to_record(&self) -> EmployeeRecord {
        let mut record = EmployeeRecord::new(self.id.clone());
        record.company_id = Some(self.company_id.clone());
        record
            .fields
            .insert("full_name".into(), self.full_name.clone().into());
        record.fields.insert("email".into(), self.email.clone().into());
        record.fields.insert("role".into(), self.role.clone().into());
        record
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDto {
    pub title: String,
    pub subtitle: String,
    pub meta: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: i64,
    pub title: String,
    pub priority: String,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseDto {
    pub name: String,
    pub steps: Vec<StepDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepDto {
    pub label: String,
    pub done: bool,
}

fn card(title: &str, subtitle: &str, meta: &str) -> CardDto {
    CardDto {
        title: title.into(),
        subtitle: subtitle.into(),
        meta: meta.into(),
    }
}

pub fn companies() -> Vec<CompanyDto> {
    [
        ("42", "Nordic Timber AB", "Sweden", "Timber", "active"),
        ("7", "Lagos Cocoa Exports", "Nigeria", "Agriculture", "active"),
        ("13", "Andes Copper SA", "Chile", "Metals", "prospect"),
        ("21", "Saigon Textiles Co.", "Vietnam", "Textiles", "active"),
        ("34", "Rotterdam Freight BV", "Netherlands", "Logistics", "dormant"),
    ]
    .into_iter()
    .map(|(id, name, country, industry, status)| CompanyDto {
        id: id.into(),
        name: name.into(),
        country: country.into(),
        industry: industry.into(),
        status: status.into(),
    })
    .collect()
}

pub fn company(id: &str) -> Option<CompanyDto> {
    companies().into_iter().find(|c| c.id == id)
}

pub fn employees() -> Vec<EmployeeDto> {
    [
        ("emp-1", "42", "Erik Lindqvist", "erik@nordictimber.se", "Export Manager"),
        ("emp-2", "42", "Sara Holm", "sara@nordictimber.se", "Compliance"),
        ("emp-3", "7", "Amina Okafor", "amina@lagoscocoa.ng", "Logistics"),
        ("emp-4", "21", "Tran Minh", "minh@saigontex.vn", "Sales Lead"),
    ]
    .into_iter()
    .map(|(id, company_id, full_name, email, role)| EmployeeDto {
        id: id.into(),
        company_id: company_id.into(),
        full_name: full_name.into(),
        email: email.into(),
        role: role.into(),
    })
    .collect()
}

pub fn tasks() -> Vec<TaskDto> {
    [
        (1, "Send pro-forma invoice to Lagos Cocoa", "high", "todo"),
        (2, "Book container for Nordic Timber", "high", "in-progress"),
        (3, "Renew export license", "medium", "todo"),
        (4, "Follow up on Andes Copper samples", "low", "in-progress"),
        (5, "Archive Q2 bills of lading", "low", "done"),
    ]
    .into_iter()
    .map(|(id, title, priority, status)| TaskDto {
        id,
        title: title.into(),
        priority: priority.into(),
        status: status.into(),
    })
    .collect()
}

pub fn sales_phases() -> Vec<PhaseDto> {
    let phase = |name: &str, steps: &[(&str, bool)]| PhaseDto {
        name: name.into(),
        steps: steps
            .iter()
            .map(|(label, done)| StepDto {
                label: (*label).into(),
                done: *done,
            })
            .collect(),
    };
    vec![
        phase("Prospecting", &[("Identify buyer", true), ("Qualify demand", true)]),
        phase(
            "Negotiation",
            &[("Send quotation", true), ("Agree incoterms", false), ("Confirm payment terms", false)],
        ),
        phase("Fulfilment", &[("Book freight", false), ("Customs clearance", false)]),
    ]
}

/// Cards for views that only list canned rows.
pub fn cards_for(view: crm_core::view::ViewId) -> Vec<CardDto> {
    use crm_core::view::ViewId;

    match view {
        ViewId::Deals => vec![
            card("Spruce lumber, 40 containers", "Nordic Timber AB", "USD 412,000 · negotiation"),
            card("Raw cocoa beans, 120 t", "Lagos Cocoa Exports", "USD 298,500 · closed won"),
            card("Cathode copper, 60 t", "Andes Copper SA", "USD 540,000 · proposal"),
        ],
        ViewId::Contacts => vec![
            card("Erik Lindqvist", "Nordic Timber AB", "erik@nordictimber.se"),
            card("Amina Okafor", "Lagos Cocoa Exports", "amina@lagoscocoa.ng"),
            card("Tran Minh", "Saigon Textiles Co.", "minh@saigontex.vn"),
        ],
        ViewId::Documents => vec![
            card("Commercial invoice #1042", "Lagos Cocoa Exports", "PDF · 2 days ago"),
            card("Certificate of origin", "Nordic Timber AB", "PDF · last week"),
        ],
        ViewId::Bills => vec![
            card("Freight invoice MSC-88121", "Rotterdam Freight BV", "EUR 14,200 · due in 5 days"),
            card("Inspection fee", "SGS Santiago", "USD 1,150 · paid"),
        ],
        ViewId::Reports => vec![
            card("Export volume by region", "Quarterly", "Updated today"),
            card("Deal win rate", "Rolling 12 months", "38%"),
        ],
        ViewId::Notifications => vec![
            card("Shipment departed Gothenburg", "Nordic Timber AB", "1 hour ago"),
            card("Payment received", "Lagos Cocoa Exports", "yesterday"),
        ],
        ViewId::AiInsights => vec![
            card("Copper prices up 6% this month", "Consider re-quoting Andes Copper", "Market"),
            card("Lagos Cocoa orders every 45 days", "Next order expected in 9 days", "Buyer pattern"),
            card("Freight rates to Rotterdam falling", "Delay booking by one week", "Logistics"),
        ],
        ViewId::Interactions => vec![
            card("Call with Erik Lindqvist", "Discussed incoterms", "Mon 10:30"),
            card("Email to Tran Minh", "Sent fabric samples catalogue", "Fri 16:05"),
        ],
        _ => Vec::new(),
    }
}
