pub use super::order_books::Entity as OrderBooks;
pub use super::order_history::Entity as OrderHistory;
