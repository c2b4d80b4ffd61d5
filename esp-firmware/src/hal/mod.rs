// HAL-Modul: Hardware-Implementierungen der esp-core Traits
//
// - indicator: WS2812 Gewinn-Anzeige über das RMT Peripheral
// - turn_leds: Spieler-LEDs über GPIO-Ausgänge

pub mod indicator;
pub mod turn_leds;

pub use indicator::RmtIndicatorLed;
pub use turn_leds::GpioTurnLeds;
