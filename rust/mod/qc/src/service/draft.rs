use labguard_core::ServiceError;

use crate::checklist;
use crate::model::{DualSide, DualValue, InputKind, QcPoint, QcStatus, ReportType, Sku};

/// General-information fields typed in by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralInfo {
    pub unit: String,
    pub vendor: String,
    pub material_code: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub rolls_supplied: String,
    pub rolls_sampled: String,
    pub receiving_date_unit: String,
    pub receiving_date_lab: String,
    pub reporting_date: String,
    pub remarks: String,
}

/// A report being filled in. Nothing is persisted until it is submitted
/// through [`QcService::submit`](super::QcService::submit).
#[derive(Debug, Clone)]
pub struct ReportDraft {
    category: ReportType,
    sku_id: Option<String>,
    points: Vec<QcPoint>,
    pub info: GeneralInfo,
    sack_image: Option<String>,
}

impl ReportDraft {
    /// An empty draft with no SKU selected.
    pub fn new(category: ReportType) -> Self {
        Self {
            category,
            sku_id: None,
            points: Vec::new(),
            info: GeneralInfo::default(),
            sack_image: None,
        }
    }

    pub fn category(&self) -> ReportType {
        self.category
    }

    pub fn sku_id(&self) -> Option<&str> {
        self.sku_id.as_deref()
    }

    pub fn points(&self) -> &[QcPoint] {
        &self.points
    }

    pub fn sack_image(&self) -> Option<&str> {
        self.sack_image.as_deref()
    }

    /// Select a SKU and regenerate the checklist from it, discarding any
    /// checkpoint edits made so far.
    pub fn select_sku(&mut self, sku: &Sku) -> Result<(), ServiceError> {
        if sku.category() != self.category {
            return Err(ServiceError::Validation(format!(
                "sku '{}' is a {} sku, not {}",
                sku.id,
                sku.category(),
                self.category
            )));
        }
        let points = checklist::generate(sku).ok_or_else(|| {
            ServiceError::Validation(format!("{} reports have no checklist", self.category))
        })?;
        self.sku_id = Some(sku.id.clone());
        self.points = points;
        Ok(())
    }

    /// Set `actual` for checkpoint `index`.
    ///
    /// Choice rows only take one of their options (or empty). Dual rows only
    /// take a canonical `"<L> (L) X <W> (W)"` string (or empty).
    pub fn set_actual(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ServiceError> {
        let value = value.into();
        let point = self.point_mut(index)?;
        match point.input_kind() {
            InputKind::Choice(options) => {
                if !point.accepts(&value) {
                    return Err(ServiceError::Validation(format!(
                        "'{}' is not an option for '{}' (expected one of: {})",
                        value,
                        point.parameter,
                        options.join(", ")
                    )));
                }
            }
            InputKind::Dual => {
                if !value.is_empty() && DualValue::decode(&value).is_none() {
                    return Err(ServiceError::Validation(format!(
                        "'{}' takes a length and width, e.g. \"20 (L) X 20 (W)\"",
                        point.parameter
                    )));
                }
            }
            InputKind::Text => {}
        }
        point.actual = value;
        Ok(())
    }

    /// Set one half of a dual-valued checkpoint. The whole `actual` string
    /// is rewritten in canonical form.
    pub fn set_dual(
        &mut self,
        index: usize,
        side: DualSide,
        value: impl Into<String>,
    ) -> Result<(), ServiceError> {
        let value = value.into();
        let point = self.point_mut(index)?;
        if point.input_kind() != InputKind::Dual {
            return Err(ServiceError::Validation(format!(
                "'{}' is not a length/width parameter",
                point.parameter
            )));
        }

        let mut wanted = DualValue::decode_or_empty(&point.actual);
        wanted.set(side, value.as_str());
        let rewritten = wanted.encode();
        // The encoded form must read back as the same pair.
        if DualValue::decode(&rewritten).as_ref() != Some(&wanted) {
            return Err(ServiceError::Validation(format!(
                "'{}' is not a valid {} for '{}' (no line breaks or \"(L) X\")",
                value,
                match side {
                    DualSide::Length => "length",
                    DualSide::Width => "width",
                },
                point.parameter
            )));
        }
        point.actual = rewritten;
        Ok(())
    }

    pub fn set_status(&mut self, index: usize, status: QcStatus) -> Result<(), ServiceError> {
        self.point_mut(index)?.status = status;
        Ok(())
    }

    /// Attach an image (data URL). Only kept on Sack reports.
    pub fn set_sack_image(&mut self, image: Option<String>) {
        self.sack_image = image;
    }

    fn point_mut(&mut self, index: usize) -> Result<&mut QcPoint, ServiceError> {
        let len = self.points.len();
        self.points.get_mut(index).ok_or_else(|| {
            ServiceError::Validation(format!(
                "no checkpoint at index {} (checklist has {})",
                index, len
            ))
        })
    }

    pub(super) fn into_parts(
        self,
    ) -> (ReportType, Option<String>, Vec<QcPoint>, GeneralInfo, Option<String>) {
        (self.category, self.sku_id, self.points, self.info, self.sack_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::starter_catalog;

    fn seed(id: &str) -> Sku {
        starter_catalog().into_iter().find(|s| s.id == id).unwrap()
    }

    fn sack_draft() -> ReportDraft {
        let mut d = ReportDraft::new(ReportType::Sack);
        d.select_sku(&seed("sku-sack-001")).unwrap();
        d
    }

    fn index_of(d: &ReportDraft, param: &str) -> usize {
        d.points().iter().position(|p| p.parameter == param).unwrap()
    }

    #[test]
    fn select_sku_generates_checklist() {
        let d = sack_draft();
        assert_eq!(d.sku_id(), Some("sku-sack-001"));
        assert_eq!(d.points().len(), 14);
    }

    #[test]
    fn select_sku_rejects_other_category() {
        let mut d = ReportDraft::new(ReportType::Laminate);
        let err = d.select_sku(&seed("sku-sack-001")).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert!(d.sku_id().is_none());
        assert!(d.points().is_empty());
    }

    #[test]
    fn reselecting_resets_edits() {
        let mut d = sack_draft();
        d.set_actual(0, "451").unwrap();
        d.select_sku(&seed("sku-sack-001")).unwrap();
        assert_eq!(d.points()[0].actual, "");
    }

    #[test]
    fn option_rows_enforce_membership() {
        let mut d = sack_draft();
        let coa = index_of(&d, "COA");
        d.set_actual(coa, "Yes").unwrap();
        assert_eq!(d.points()[coa].actual, "Yes");

        let err = d.set_actual(coa, "Maybe").unwrap_err();
        assert!(err.to_string().contains("not an option"));
        assert_eq!(d.points()[coa].actual, "Yes");

        d.set_actual(coa, "").unwrap();
        assert_eq!(d.points()[coa].actual, "");
    }

    #[test]
    fn free_text_rows_take_anything() {
        let mut d = sack_draft();
        let gsm = index_of(&d, "GSM");
        d.set_actual(gsm, "72 approx").unwrap();
        assert_eq!(d.points()[gsm].actual, "72 approx");
    }

    #[test]
    fn dual_rows() {
        let mut d = sack_draft();
        let bs = index_of(&d, "Breaking strength");
        d.set_dual(bs, DualSide::Length, "380").unwrap();
        d.set_dual(bs, DualSide::Width, "350").unwrap();
        assert_eq!(d.points()[bs].actual, "380 (L) X 350 (W)");
        assert_eq!(d.points()[bs].dual(DualSide::Width), "350");

        assert!(d.set_actual(bs, "380 by 350").is_err());
        d.set_actual(bs, "390 (L) X 360 (W)").unwrap();
        assert_eq!(d.points()[bs].dual(DualSide::Length), "390");

        let gsm = index_of(&d, "GSM");
        assert!(d.set_dual(gsm, DualSide::Length, "1").is_err());
    }

    #[test]
    fn dual_side_rejects_unencodable_values() {
        let mut d = sack_draft();
        let mesh = index_of(&d, "Mesh");
        d.set_dual(mesh, DualSide::Width, "20").unwrap();

        for bad in ["21\n", "2\r1", "21\u{2028}", "21\u{2029}", "1 (L) X 2"] {
            let err = d.set_dual(mesh, DualSide::Length, bad).unwrap_err();
            assert_eq!(err.error_code(), "VALIDATION_FAILED", "{:?}", bad);
        }
        // A rejected edit leaves the stored pair alone.
        assert_eq!(d.points()[mesh].actual, " (L) X 20 (W)");

        d.set_dual(mesh, DualSide::Length, "21").unwrap();
        assert_eq!(d.points()[mesh].actual, "21 (L) X 20 (W)");
        assert_eq!(d.points()[mesh].dual(DualSide::Length), "21");
    }

    #[test]
    fn sack_image_replace_and_clear() {
        let mut d = sack_draft();
        assert!(d.sack_image().is_none());
        d.set_sack_image(Some("data:image/png;base64,AAAA".into()));
        assert_eq!(d.sack_image(), Some("data:image/png;base64,AAAA"));
        d.set_sack_image(None);
        assert!(d.sack_image().is_none());
    }

    #[test]
    fn status_and_bounds() {
        let mut d = sack_draft();
        d.set_status(1, QcStatus::Fail).unwrap();
        assert_eq!(d.points()[1].status, QcStatus::Fail);

        let err = d.set_status(14, QcStatus::Pass).unwrap_err();
        assert!(err.to_string().contains("index 14"));
        assert!(ReportDraft::new(ReportType::Sack).set_actual(0, "x").is_err());
    }
}
