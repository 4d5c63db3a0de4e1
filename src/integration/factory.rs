use super::module::ScreenModule;

/// Builds screen modules for a typed route.
///
/// Implementations `match` exhaustively over the route, so adding a route
/// without a screen fails to compile.
///
/// ```
/// use flowkit::integration::{ScreenFactory, ScreenModule};
/// use flowkit::navigation::ScreenHandle;
///
/// enum SettingsRoute {
///     Account,
///     Notifications,
/// }
///
/// struct SettingsScreens;
///
/// impl ScreenFactory for SettingsScreens {
///     type Route = SettingsRoute;
///
///     fn make(&self, route: SettingsRoute) -> ScreenModule {
///         let title = match route {
///             SettingsRoute::Account => "Account",
///             SettingsRoute::Notifications => "Notifications",
///         };
///         ScreenModule::new(ScreenHandle::new(title))
///     }
/// }
///
/// let module = SettingsScreens.make(SettingsRoute::Account);
/// assert_eq!(module.screen().title(), "Account");
/// ```
pub trait ScreenFactory {
    type Route;

    fn make(&self, route: Self::Route) -> ScreenModule;
}
