//! Vacancy allocation across recruiters and the staffing plans that carry it.

mod allocation;
pub mod codec;
pub mod plans;
pub mod router;
mod views;

pub use allocation::{Allocation, AllocationStatus, Assignment};
pub use router::allocation_router;
pub use views::AllocationView;
