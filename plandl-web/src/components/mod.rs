pub mod game_info;
pub mod game_over;
pub mod guess_form;
pub mod plane_image;
pub mod round_result;

pub use game_info::GameInfo;
pub use game_over::GameOver;
pub use guess_form::GuessForm;
pub use plane_image::PlaneImage;
pub use round_result::RoundResult;
