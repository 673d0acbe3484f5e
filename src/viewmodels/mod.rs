pub mod login_viewmodel;
pub mod pet_details_viewmodel;
pub mod pet_edit_viewmodel;
pub mod pet_list_viewmodel;

pub use login_viewmodel::{LoginOutcome, LoginViewModel};
pub use pet_details_viewmodel::PetDetailsViewModel;
pub use pet_edit_viewmodel::{PetEditViewModel, PetForm, SubmitOutcome};
pub use pet_list_viewmodel::{paginate, PetListViewModel, PetPage};
