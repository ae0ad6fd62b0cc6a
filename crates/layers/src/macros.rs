//! Layer definition and registration macros.

/// Defines a layer type that is fully described by its configuration.
///
/// The generated struct is generic over the precision tag and implements
/// [`Layer`](crate::Layer) and [`LayerClass`](crate::LayerClass).
#[macro_export]
macro_rules! define_layer {
	($(#[$attr:meta])* $vis:vis struct $name:ident $(, engine: $engine:expr)?) => {
		$(#[$attr])*
		#[derive(Debug)]
		$vis struct $name<P> {
			param: $crate::proto::LayerParameter,
			_precision: ::std::marker::PhantomData<P>,
		}

		impl<P: $crate::LayerPrecision> $crate::Layer<P> for $name<P> {
			fn param(&self) -> &$crate::proto::LayerParameter {
				&self.param
			}

			fn engine(&self) -> $crate::proto::Engine {
				$crate::__layer_engine!($($engine)?)
			}

			fn type_name(&self) -> &'static str {
				stringify!($name)
			}

			fn as_any(&self) -> &dyn ::std::any::Any {
				self
			}
		}

		impl<P: $crate::LayerPrecision> $crate::LayerClass<P> for $name<P> {
			fn from_param(param: &$crate::proto::LayerParameter) -> Self {
				Self {
					param: param.clone(),
					_precision: ::std::marker::PhantomData,
				}
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __layer_engine {
	() => {
		$crate::proto::Engine::Native
	};
	($engine:expr) => {
		$engine
	};
}

/// Registers a creator function for both precisions.
///
/// `$creator` must be a function generic over the precision tag with the
/// [`LayerCreator`](crate::LayerCreator) signature. Use this for layers
/// whose construction needs more than the configuration, such as engine
/// selection.
#[macro_export]
macro_rules! register_layer_creator {
	($kind:ident, $creator:ident) => {
		$crate::inventory::submit! {
			$crate::LayerRegistrar::<f32>::new($crate::proto::LayerType::$kind, $creator::<f32>, module_path!())
		}
		$crate::inventory::submit! {
			$crate::LayerRegistrar::<f64>::new($crate::proto::LayerType::$kind, $creator::<f64>, module_path!())
		}
	};
}

/// Registers a layer type for both precisions using its
/// [`LayerClass::from_param`](crate::LayerClass::from_param) constructor.
///
/// A layer kind must be registered through exactly one of this macro or
/// [`register_layer_creator!`].
#[macro_export]
macro_rules! register_layer_class {
	($kind:ident, $class:ident) => {
		$crate::inventory::submit! {
			$crate::LayerRegistrar::<f32>::new(
				$crate::proto::LayerType::$kind,
				$crate::construct::<f32, $class<f32>>,
				module_path!(),
			)
		}
		$crate::inventory::submit! {
			$crate::LayerRegistrar::<f64>::new(
				$crate::proto::LayerType::$kind,
				$crate::construct::<f64, $class<f64>>,
				module_path!(),
			)
		}
	};
}

/// The cuDNN creator for `$class` in builds that include it, `None` otherwise.
///
/// Expands inside a function generic over `P`.
macro_rules! cudnn_creator {
	($class:ident) => {{
		#[cfg(feature = "cudnn")]
		let creator: Option<$crate::LayerCreator<P>> = Some($crate::construct::<P, $crate::cudnn::$class<P>>);
		#[cfg(not(feature = "cudnn"))]
		let creator: Option<$crate::LayerCreator<P>> = None;
		creator
	}};
}
