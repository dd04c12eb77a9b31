//! Field identifiers shared by the forms and their error reports.

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const IS_UAE_RESIDENT: &str = "is_uae_resident";
pub const EMIRATES_ID: &str = "emirates_id";
pub const PASSPORT_NUMBER: &str = "passport_number";
pub const PASSPORT_EXPIRY: &str = "passport_expiry";
pub const COUNTRY_CODE: &str = "country_code";
pub const PASSPORT_COPY: &str = "passport_copy";
pub const SHARE_PERCENTAGE: &str = "share_percentage";

pub const BUSINESS_CATEGORY: &str = "business_category";
pub const ACTIVITIES: &str = "activities";
pub const HAS_RESERVED_NAME: &str = "has_reserved_name";
pub const RESERVED_NAME_DOCUMENT: &str = "reserved_name_document";
pub const SUGGESTED_NAMES: &str = "suggested_names";
pub const SHAREHOLDER_COUNT: &str = "shareholder_count";
pub const ACTIVITY_COUNT: &str = "activity_count";
pub const HAS_TRADE_NAME: &str = "has_trade_name";
pub const BUSINESS_LOCATION: &str = "business_location";

pub const FULL_NAME: &str = "full_name";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirm_password";
