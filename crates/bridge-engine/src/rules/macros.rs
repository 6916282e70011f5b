/// Declares a unit struct implementing [`Rule`](crate::rules::Rule).
///
/// ```ignore
/// bidding_rule! {
///     struct StrongClub;
///     name: "Strong 1C",
///     description: "18+ HCP, any shape",
///     applies: |ctx| ctx.hcp >= 18,
///     calls: |_| vec![bid(1, Strain::Clubs)],
/// }
/// ```
#[macro_export]
macro_rules! bidding_rule {
    (
        $(#[$meta:meta])*
        struct $struct_name:ident;
        name: $name:literal,
        description: $desc:literal,
        applies: |$applies_ctx:tt| $applies:expr,
        calls: |$calls_ctx:tt| $calls:expr $(,)?
    ) => {
        $(#[$meta])*
        pub struct $struct_name;

        impl $crate::rules::Rule for $struct_name {
            fn name(&self) -> &'static str {
                $name
            }

            fn description(&self) -> &'static str {
                $desc
            }

            #[allow(unused_variables)]
            fn applies(&self, $applies_ctx: &$crate::context::BiddingContext<'_>) -> bool {
                $applies
            }

            #[allow(unused_variables)]
            fn calls(
                &self,
                $calls_ctx: &$crate::context::BiddingContext<'_>,
            ) -> Vec<bridge_core::Call> {
                $calls
            }
        }
    };
}
