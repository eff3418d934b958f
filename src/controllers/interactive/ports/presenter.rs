use crate::controllers::interactive::data::snapshot::CurveSnapshot;

pub trait CurvePresenterPort: Send + Sync {
    fn present(&self, snapshot: CurveSnapshot);
}
