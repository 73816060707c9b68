//! One-shot hardware peripheral initialization.
//!
//! Configures the radar ADC channels, the switch GPIOs, the servo LEDC
//! timer/channels and the host UART using raw ESP-IDF sys calls.  Called
//! once from `main()` before the control loop starts.
//!
//! The small handle types at the bottom ([`LedcChannel`], [`GpioOutput`])
//! expose the configured peripherals through `embedded-hal` traits, so the
//! servo and switch drivers stay generic and run against mocks on host.

use core::convert::Infallible;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::config::FirmwareConfig;
#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
    LedcInitFailed(i32),
    UartInstallFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc)     => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc)  => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed(rc)    => write!(f, "LEDC timer/channel config failed (rc={})", rc),
            Self::UartInstallFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
        }
    }
}

impl From<HwInitError> for crate::error::Error {
    fn from(_: HwInitError) -> Self {
        Self::Init("peripheral init")
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals(config: &FirmwareConfig) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio_outputs()?;
        init_ledc()?;
        init_uart(config.serial_baud)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(_config: &crate::config::FirmwareConfig) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

#[cfg(target_os = "espidf")]
fn check(ret: esp_err_t, err: fn(i32) -> HwInitError) -> Result<(), HwInitError> {
    if ret == ESP_OK as i32 { Ok(()) } else { Err(err(ret)) }
}

// ── ADC (oneshot) ─────────────────────────────────────────────

/// Radar modules are read at 12 bits and scaled to 10-bit full scale.
pub const ADC_SAMPLE_SHIFT: u32 = 2;

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    check(unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) }, HwInitError::AdcInitFailed)?;

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: pins::RADAR_ADC_ATTEN,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };
    for gpio in pins::RADAR_PINS {
        let Some(channel) = pins::radar_adc_channel(gpio) else { continue };
        check(
            unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) },
            HwInitError::AdcInitFailed,
        )?;
        info!("hw_init: radar input GPIO{} -> ADC1_CH{}", gpio, channel);
    }
    Ok(())
}

/// Raw 12-bit ADC1 reading, 0 on driver error.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract, single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

/// Injected ADC1 levels for host runs, indexed by ADC channel.
#[cfg(not(target_os = "espidf"))]
static SIM_ADC1: [AtomicU16; 10] = [const { AtomicU16::new(0) }; 10];

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc1(channel: u32, raw: u16) {
    if let Some(slot) = SIM_ADC1.get(channel as usize) {
        slot.store(raw, Ordering::Relaxed);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(channel: u32) -> u16 {
    SIM_ADC1
        .get(channel as usize)
        .map_or(0, |slot| slot.load(Ordering::Relaxed))
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = [pins::EYE_GPIO, pins::FOG_GPIO, pins::INDICATOR_GPIO];

    for pin in output_pins.into_iter().filter(|&p| p != pins::NO_PIN) {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        check(unsafe { gpio_config(&cfg) }, HwInitError::GpioConfigFailed)?;
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── LEDC PWM (servos) ─────────────────────────────────────────

/// Servo timer resolution; at 50 Hz one LSB is ~1.2 µs.
pub const LEDC_SERVO_RESOLUTION_BITS: u32 = 14;
pub const LEDC_SERVO_DUTY_MAX: u16 = (1 << LEDC_SERVO_RESOLUTION_BITS) - 1;

/// LEDC channel driving the servo in `SERVO_PINS[i]`.
pub const fn ledc_servo_channel(slot: usize) -> u32 {
    slot as u32
}

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() -> Result<(), HwInitError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_14_BIT,
        freq_hz: pins::SERVO_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    check(unsafe { ledc_timer_config(&timer) }, HwInitError::LedcInitFailed)?;

    for (slot, (axis, gpio)) in pins::SERVO_PINS.iter().enumerate() {
        if *gpio == pins::NO_PIN {
            continue;
        }
        check(
            unsafe {
                ledc_channel_config(&ledc_channel_config_t {
                    speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
                    channel: ledc_servo_channel(slot),
                    timer_sel: ledc_timer_t_LEDC_TIMER_0,
                    gpio_num: *gpio,
                    duty: 0,
                    hpoint: 0,
                    ..Default::default()
                })
            },
            HwInitError::LedcInitFailed,
        )?;
        info!("hw_init: servo {:?} on GPIO{} (LEDC CH{})", axis, gpio, slot);
    }
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u16) {
    // SAFETY: LEDC channels were configured in init_ledc(); duty register
    // writes are race-free since only the main loop calls this function.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, u32::from(duty));
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u16) {}

// ── UART (host link) ──────────────────────────────────────────

pub const UART_RX_BUF: i32 = 256;
pub const UART_TX_BUF: i32 = 256;

#[cfg(target_os = "espidf")]
unsafe fn init_uart(baud: u32) -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: baud as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };
    let port = pins::HOST_UART_PORT;
    check(
        unsafe { uart_driver_install(port, UART_RX_BUF, UART_TX_BUF, 0, core::ptr::null_mut(), 0) },
        HwInitError::UartInstallFailed,
    )?;
    check(unsafe { uart_param_config(port, &cfg) }, HwInitError::UartInstallFailed)?;
    check(
        unsafe { uart_set_pin(port, pins::UART_TX_GPIO, pins::UART_RX_GPIO, -1, -1) },
        HwInitError::UartInstallFailed,
    )?;
    info!("hw_init: UART{} at {} baud", port, baud);
    Ok(())
}

// ── embedded-hal handles ──────────────────────────────────────

/// One configured LEDC channel.
#[derive(Debug)]
pub struct LedcChannel {
    channel: u32,
}

impl LedcChannel {
    pub const fn new(channel: u32) -> Self {
        Self { channel }
    }
}

impl embedded_hal::pwm::ErrorType for LedcChannel {
    type Error = Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for LedcChannel {
    fn max_duty_cycle(&self) -> u16 {
        LEDC_SERVO_DUTY_MAX
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        ledc_set(self.channel, duty.min(LEDC_SERVO_DUTY_MAX));
        Ok(())
    }
}

/// One configured push-pull GPIO output.
#[derive(Debug)]
pub struct GpioOutput {
    pin: i32,
}

impl GpioOutput {
    pub const fn new(pin: i32) -> Self {
        Self { pin }
    }
}

impl embedded_hal::digital::ErrorType for GpioOutput {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        gpio_write(self.pin, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        gpio_write(self.pin, true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_adc_reads_back_injected_level() {
        sim_set_adc1(7, 3000);
        assert_eq!(adc1_read(7), 3000);
        assert_eq!(adc1_read(99), 0);
    }

    #[test]
    fn servo_duty_fits_the_pwm_word() {
        use embedded_hal::pwm::SetDutyCycle;
        let ch = LedcChannel::new(0);
        assert_eq!(ch.max_duty_cycle(), 16_383);
    }
}
