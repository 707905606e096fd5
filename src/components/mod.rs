//! UI Components
//!
//! Pages, dialogs and the widgets they share.

mod dialog;
mod delete_confirm_button;
mod speed_dial;
mod loading_spinner;
mod global_snackbar;
mod nav_bar;
mod home_page;
mod email_verification_pending;
mod login_form;
mod signup_form;
mod verify_email;
mod recipes_home;
mod recipes_list;
mod recipes_list_item;
mod recipe_page;
mod recipe_detail;
mod recipe_form;
mod draft_rows;
mod manage_subsections_dialog;
mod add_ingredient_dialog;
mod add_note_dialog;
mod upload_photo_dialog;
mod rate_review_dialog;
mod submit_edit_options_dialog;

pub use dialog::{reset_after_close, Dialog};
pub use delete_confirm_button::DeleteConfirmButton;
pub use speed_dial::{DialAction, SpeedDial, UnverifiedUserSpeedDial};
pub use loading_spinner::{FetchError, LoadingSpinner};
pub use global_snackbar::GlobalSnackbar;
pub use nav_bar::NavBar;
pub use home_page::HomePage;
pub use email_verification_pending::EmailVerificationPending;
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
pub use verify_email::VerifyEmail;
pub use recipes_home::RecipesHome;
pub use recipes_list::RecipesList;
pub use recipes_list_item::RecipesListItem;
pub use recipe_page::RecipePage;
pub use recipe_detail::RecipeDetail;
pub use recipe_form::RecipeForm;
pub use draft_rows::{ItemLineRow, NoteLineRow, StepLineRow};
pub use manage_subsections_dialog::ManageSubsectionsDialog;
pub use add_ingredient_dialog::AddIngredientDialog;
pub use add_note_dialog::AddNoteDialog;
pub use upload_photo_dialog::UploadPhotoDialog;
pub use rate_review_dialog::RateReviewDialog;
pub use submit_edit_options_dialog::SubmitEditOptionsDialog;
