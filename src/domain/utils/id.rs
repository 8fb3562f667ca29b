use std::fmt;
use std::marker::PhantomData;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct Id<T> {
    pub id: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Id { id: id.into(), _marker: PhantomData }
    }

    /// Creates an identifier from a random UUID v4, used when a caller supplies no name.
    pub fn generate() -> Self {
        Id::new(uuid::Uuid::new_v4().to_string())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {:?}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ReservationTag;

pub type ReservationName = Id<ReservationTag>;
