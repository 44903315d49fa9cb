/// A user-defined organizational bucket owning a set of notes
#[derive(Clone, Debug)]
pub struct Area {
    pub id: i64,
    pub name: String,
}
