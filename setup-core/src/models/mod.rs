mod activity;
mod business_category;
mod business_location;
mod company_setup;
mod cost_estimation;
mod document;
mod identity;
mod manager;
mod person;
mod pricing;
mod shareholder;
mod trade_name;

pub use activity::Activity;
pub use business_category::BusinessCategory;
pub use business_location::BusinessLocation;
pub use company_setup::CompanySetupData;
pub use cost_estimation::{CostBreakdown, CostEstimationData, EstimateSelections, EstimateUpdate};
pub use document::{DocumentKind, DocumentRef};
pub use identity::{ForeignIdentity, Identity, ResidentIdentity};
pub use manager::Manager;
pub use person::{PersonDraft, PersonalInfo};
pub use pricing::PricingSchedule;
pub use shareholder::Shareholder;
pub use trade_name::TradeName;
