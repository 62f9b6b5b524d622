pub mod shared_factory;

pub use self::shared_factory::SharedFactory;
