//! Plain-text rendering of command results.

use std::fmt;

use setup_core::calculations::common::format_aed;
use setup_core::session::{Access, Route};
use setup_core::CostEstimationData;

use crate::answers::NameCheckNote;

/// Cost summary shown at the end of a quick estimate.
pub struct EstimateReport<'a>(pub &'a CostEstimationData);

impl fmt::Display for EstimateReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let selections = self.0.selections();
        let costs = self.0.costs();

        let category = selections
            .business_category
            .as_ref()
            .map_or("-", |c| c.name.as_str());
        let location = selections.business_location.map_or("-", |l| l.label());
        let trade_name = if selections.has_trade_name { "Yes" } else { "No" };

        writeln!(f, "{:<22}{}", "Business category", category)?;
        writeln!(f, "{:<22}{}", "Activities", selections.number_of_activities)?;
        writeln!(f, "{:<22}{}", "Shareholders", selections.number_of_shareholders)?;
        writeln!(f, "{:<22}{}", "Trade name", trade_name)?;
        writeln!(f, "{:<22}{}", "Location", location)?;
        writeln!(f)?;

        let rows = [
            ("Base cost", costs.base_cost()),
            ("Activities", costs.activity_cost()),
            ("Shareholders", costs.shareholder_cost()),
            ("Trade name", costs.trade_name_cost()),
            ("Location", costs.location_cost()),
        ];
        for (label, amount) in rows {
            writeln!(f, "{:<22}{:>14}", label, format_aed(amount))?;
        }
        writeln!(f, "{:<22}{:>14}", "Total", format_aed(costs.total_cost()))
    }
}

/// One line per checked name with its advisories.
pub struct NameCheckReport<'a>(pub &'a [NameCheckNote]);

impl fmt::Display for NameCheckReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for note in self.0 {
            match &note.check {
                None => writeln!(f, "{}: check unavailable", note.name)?,
                Some(check) if check.is_clear() => writeln!(f, "{}: no issues", note.name)?,
                Some(check) => writeln!(f, "{}: {}", note.name, check.advisories().join(", "))?,
            }
            if let Some(arabic) = note.check.as_ref().and_then(|c| c.arabic_equivalent_name.as_deref()) {
                writeln!(f, "  Arabic equivalent: {arabic}")?;
            }
        }
        Ok(())
    }
}

/// Which routes the current login opens.
pub struct AccessReport(pub Vec<(Route, Access)>);

impl fmt::Display for AccessReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (route, access) in &self.0 {
            let access = match access {
                Access::Granted => "open",
                Access::RedirectToLogin => "login required",
            };
            writeln!(f, "{:<22}{}", route.path(), access)?;
        }
        Ok(())
    }
}
