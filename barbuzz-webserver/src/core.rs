pub use barbuzz_core::{db, repositories, usecases};

pub mod entities {
    pub use barbuzz_core::entities::*;
    #[cfg(test)]
    pub use barbuzz_entities::builders::*;
}

pub mod prelude {
    pub use barbuzz_application::error::*;

    pub use super::{db::*, entities::*, repositories::*};
}
