mod arguments;
mod location;
mod output;
mod registry;
mod settings;
mod weather;

pub use arguments::ToolArguments;
pub use location::{get_location, LocationResult, LOCATION_ERROR};
pub use output::{ToolFailure, ToolOutput};
pub use registry::{ToolName, ToolRegistry};
pub use settings::ToolSettings;
pub use weather::{get_current_weather, WeatherArgs, WeatherResult, CELSIUS_LABEL, WEATHER_ERROR};
