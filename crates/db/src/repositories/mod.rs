//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod enrollment_repo;
pub mod hotel_repo;
pub mod room_repo;
pub mod session_repo;
pub mod ticket_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use hotel_repo::HotelRepo;
pub use room_repo::RoomRepo;
pub use session_repo::SessionRepo;
pub use ticket_repo::TicketRepo;
pub use user_repo::UserRepo;
