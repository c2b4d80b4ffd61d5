// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use esp_tictactoe::WinnerChannel;
use esp_tictactoe::tasks::{game_loop_task, winner_blink_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt die
/// beiden Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Winner-Channel erstellen (Game-Loop → Gewinn-Anzeige)
    // Kapazität 1: send blockiert bis der vorige Wert abgeholt wurde
    static WINNER_CHANNEL: static_cell::StaticCell<WinnerChannel> = static_cell::StaticCell::new();
    let winner_channel = &*WINNER_CHANNEL.init(WinnerChannel::new());
    let winner_sender = winner_channel.sender();
    let winner_receiver = winner_channel.receiver();

    // Spawn Game-Loop Task (primärer Kontext: Buttons, Spiellogik, Turn-LEDs)
    spawner
        .spawn(game_loop_task(
            peripherals.GPIO4,
            peripherals.GPIO5,
            peripherals.GPIO6,
            peripherals.GPIO10,
            peripherals.GPIO11,
            winner_sender,
        ))
        .unwrap();

    // Spawn Winner-Blink Task (sekundärer Kontext: Gewinn-Anzeige)
    spawner
        .spawn(winner_blink_task(
            peripherals.GPIO8,
            peripherals.RMT,
            winner_receiver,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
