use log::debug;

use crate::{Result, Settings};

macro_rules! passes {
    ([ $( $name:ident => $class:ident, )* ]) => {
        $( mod $name; )*
        $( pub use self::$name::*; )*

        #[derive(Debug)]
        pub struct HbaoPasses {
            $( pub $name: $class, )*
        }

        impl HbaoPasses {
            pub fn new(settings: &Settings) -> Result<Self> {
                debug!("Initializing passes");

                Ok(Self {
                    $( $name: $class::new(settings)?, )*
                })
            }
        }
    };
}

passes!([
    blur => BlurPass,
    composition => CompositionPass,
    deinterleave => DeinterleavePass,
    depth_linearize => DepthLinearizePass,
    hbao_calc => HbaoCalcPass,
    hbao_classic => HbaoClassicPass,
    reinterleave => ReinterleavePass,
    view_normal => ViewNormalPass,
]);
