//! Typed views over [`ViewInstance`].

use super::materialize::ViewInstance;
use super::shape::{PrimitiveType, ViewInterface};
use crate::nodes::Scalar;

/// A Rust type an accessor can declare as its scalar result.
pub trait PrimitiveValue: Sized {
    /// The declared type used for coercion.
    const PRIMITIVE: PrimitiveType;

    /// Convert a resolved scalar. `None` when the scalar does not fit.
    fn from_scalar(scalar: &Scalar) -> Option<Self>;
}

impl PrimitiveValue for String {
    const PRIMITIVE: PrimitiveType = PrimitiveType::String;

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        Some(scalar.to_string())
    }
}

impl PrimitiveValue for bool {
    const PRIMITIVE: PrimitiveType = PrimitiveType::Boolean;

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        scalar.as_bool()
    }
}

impl PrimitiveValue for i64 {
    const PRIMITIVE: PrimitiveType = PrimitiveType::Integer;

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        scalar.as_i64()
    }
}

impl PrimitiveValue for f64 {
    const PRIMITIVE: PrimitiveType = PrimitiveType::Float;

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        scalar.as_f64()
    }
}

/// A generated, strongly typed view.
///
/// Implemented by [`view_interface!`](crate::view_interface); each view
/// type is a thin wrapper whose accessors forward to its [`ViewInstance`].
pub trait View<'a>: Sized {
    fn interface() -> &'static ViewInterface;
    fn from_instance(instance: ViewInstance<'a>) -> Self;
    fn instance(&self) -> &ViewInstance<'a>;
}

/// Declare a view interface and its typed wrapper.
///
/// Each accessor names its document property and its shape:
///
/// | shape        | Rust result                 |
/// |--------------|-----------------------------|
/// | `one<T>`     | `Result<Option<T>, _>`      |
/// | `many<T>`    | `Result<Vec<T>, _>`         |
/// | `view<V>`    | `Result<Option<V<'a>>, _>`  |
/// | `views<V>`   | `Result<Vec<V<'a>>, _>`     |
/// | `raw<Scalar>`| `Result<Option<Scalar>, _>` |
///
/// `T` implements [`PrimitiveValue`]; `V` is another generated view. The
/// list forms skip null children; `ViewInstance::get` keeps them in place.
///
/// ```ignore
/// view_interface! {
///     /// A RAML resource.
///     pub struct Resource("Resource") {
///         relative_uri("relativeUri") -> one<String>;
///         resources("resources") -> views<Resource>;
///     }
/// }
/// ```
#[macro_export]
macro_rules! view_interface {
    (@shape one $arg:ident) => {
        $crate::model::Shape::Primitive(<$arg as $crate::model::PrimitiveValue>::PRIMITIVE)
    };
    (@shape many $arg:ident) => {
        $crate::model::Shape::ListOfPrimitive(<$arg as $crate::model::PrimitiveValue>::PRIMITIVE)
    };
    (@shape view $arg:ident) => {
        $crate::model::Shape::View(<$arg<'static>>::descriptor)
    };
    (@shape views $arg:ident) => {
        $crate::model::Shape::ListOfView(<$arg<'static>>::descriptor)
    };
    (@shape raw $arg:ident) => {
        $crate::model::Shape::Passthrough
    };

    (@method $lt:lifetime, [$(#[$ameta:meta])*] $method:ident $key:literal one $arg:ident) => {
        $(#[$ameta])*
        pub fn $method(&self) -> ::std::result::Result<::std::option::Option<$arg>, $crate::model::ModelError> {
            self.instance.primitive($key)
        }
    };
    (@method $lt:lifetime, [$(#[$ameta:meta])*] $method:ident $key:literal many $arg:ident) => {
        $(#[$ameta])*
        pub fn $method(&self) -> ::std::result::Result<::std::vec::Vec<$arg>, $crate::model::ModelError> {
            self.instance.primitive_list($key)
        }
    };
    (@method $lt:lifetime, [$(#[$ameta:meta])*] $method:ident $key:literal view $arg:ident) => {
        $(#[$ameta])*
        pub fn $method(&self) -> ::std::result::Result<::std::option::Option<$arg<$lt>>, $crate::model::ModelError> {
            self.instance.view($key)
        }
    };
    (@method $lt:lifetime, [$(#[$ameta:meta])*] $method:ident $key:literal views $arg:ident) => {
        $(#[$ameta])*
        pub fn $method(&self) -> ::std::result::Result<::std::vec::Vec<$arg<$lt>>, $crate::model::ModelError> {
            self.instance.view_list($key)
        }
    };
    (@method $lt:lifetime, [$(#[$ameta:meta])*] $method:ident $key:literal raw $arg:ident) => {
        $(#[$ameta])*
        pub fn $method(&self) -> ::std::result::Result<::std::option::Option<$crate::nodes::Scalar>, $crate::model::ModelError> {
            self.instance.raw($key)
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($iface:literal) {
            $(
                $(#[$ameta:meta])*
                $method:ident($key:literal) -> $kind:ident<$arg:ident>;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name<'a> {
            instance: $crate::model::ViewInstance<'a>,
        }

        impl $name<'_> {
            /// The static descriptor of this interface.
            pub fn descriptor() -> &'static $crate::model::ViewInterface {
                static INTERFACE: $crate::model::ViewInterface = $crate::model::ViewInterface {
                    name: $iface,
                    accessors: &[
                        $(
                            $crate::model::Accessor {
                                name: $key,
                                shape: $crate::view_interface!(@shape $kind $arg),
                            },
                        )*
                    ],
                };
                &INTERFACE
            }
        }

        impl<'a> $name<'a> {
            $(
                $crate::view_interface!(@method 'a, [$(#[$ameta])*] $method $key $kind $arg);
            )*
        }

        impl<'a> $crate::model::View<'a> for $name<'a> {
            fn interface() -> &'static $crate::model::ViewInterface {
                Self::descriptor()
            }

            fn from_instance(instance: $crate::model::ViewInstance<'a>) -> Self {
                Self { instance }
            }

            fn instance(&self) -> &$crate::model::ViewInstance<'a> {
                &self.instance
            }
        }

        impl ::std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.instance).finish()
            }
        }
    };
}
