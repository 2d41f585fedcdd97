#![no_std]
#![no_main]

use core::cell::{Cell, RefCell};

use critical_section::Mutex;
use embedded_hal_0_2::timer::CountDown;
use fugit::{ExtU32, RateExtU32};
use panic_halt as _;

use waveshare_rp2040_zero::{hal::{self as hal, gpio::{bank0::Gpio22, FunctionI2C, FunctionSioInput, Interrupt::EdgeLow, Pin, PullUp}, Timer, I2C}, XOSC_CRYSTAL_FREQ};
use hal::pac;
use pac::interrupt;

use rp2040_oled::demo::{BouncingBall, Scene};
use rp2040_oled::{Color, Config, Display128x64, DisplayInterface, I2cInterface, FONT_8X8};

const DISPLAY_WIDTH: i16 = 128;
const DISPLAY_HEIGHT: i16 = 64;

const POLL_MS: u32 = 10;
const DEBOUNCE_MS: u32 = 200;
const TITLE_MS: u32 = 1_500;
const SCENE_MS: u32 = 500;
const ANIMATION_US: u64 = 3_000_000;
const BALL_STEP_US: u64 = 30_000;

type ButtonPin = Pin<Gpio22, FunctionSioInput, PullUp>;

static BUTTON: Mutex<RefCell<Option<ButtonPin>>> = Mutex::new(RefCell::new(None));
static BUTTON_PRESSED: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

fn button_pressed() -> bool {
    critical_section::with(|cs| BUTTON_PRESSED.borrow(cs).get())
}

fn take_button_press() -> bool {
    critical_section::with(|cs| BUTTON_PRESSED.borrow(cs).replace(false))
}

/// Sleeps for `ms` in short slices; returns true as soon as the button is pressed.
fn wait_or_press(timer: &Timer, ms: u32) -> bool {
    let mut countdown = timer.count_down();
    for _ in 0..ms / POLL_MS {
        countdown.start((POLL_MS * 1_000).micros());
        _ = nb::block!(countdown.wait());
        if button_pressed() {
            return true;
        }
    }
    false
}

fn debounce(timer: &Timer) {
    let mut countdown = timer.count_down();
    countdown.start((DEBOUNCE_MS * 1_000).micros());
    _ = nb::block!(countdown.wait());
    take_button_press();
}

fn draw_title<I: DisplayInterface>(display: &mut Display128x64<I>) {
    display.fill(Color::On);
    display.fill_rectangle(2, 2, 125, 12, Color::Off);
    display.set_cursor(36, 4);
    _ = display.write_string("DISPLAY", &FONT_8X8, Color::On);
    display.draw_rectangle(3, 14, 125, 62, Color::Off);
    display.set_cursor(24, 26);
    _ = display.write_string("Self test", &FONT_8X8, Color::Off);
    display.set_cursor(24, 40);
    _ = display.write_string("Press: ball", &FONT_8X8, Color::Off);
    display.fill_triangle(4, 38, 12, 30, 12, 46, Color::Off);
    display.fill_triangle(123, 38, 115, 30, 115, 46, Color::Off);
    _ = display.update();
}

fn run_animation<I: DisplayInterface>(display: &mut Display128x64<I>, timer: &Timer) {
    let mut ball = BouncingBall::centered(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    let start = timer.get_counter().ticks();
    let mut last_step = start;
    loop {
        let now = timer.get_counter().ticks();
        if now - start >= ANIMATION_US || take_button_press() {
            break;
        }
        if now - last_step > BALL_STEP_US {
            ball.advance(DISPLAY_WIDTH, DISPLAY_HEIGHT);
            last_step = now;
        }
        ball.render(display.framebuffer_mut());
        _ = display.update();
    }
}

#[hal::entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let sio = hal::Sio::new(pac.SIO);

    let clocks = hal::clocks::init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap();

    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let sda_pin = pins.gpio14.reconfigure::<FunctionI2C, PullUp>();
    let scl_pin = pins.gpio15.reconfigure::<FunctionI2C, PullUp>();
    let i2c = I2C::i2c1(
        pac.I2C1,
        sda_pin,
        scl_pin,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    let button = pins.gpio22.into_pull_up_input();
    button.set_interrupt_enabled(EdgeLow, true);
    critical_section::with(move |cs| {
        BUTTON.borrow_ref_mut(cs).replace(button);
    });

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let mut display = Display128x64::new(I2cInterface::new(i2c), Config::default());
    if display.init(&mut timer).is_err() {
        // Nothing to show without a panel; stay asleep.
        loop {
            cortex_m::asm::wfi();
        }
    }

    draw_title(&mut display);
    if wait_or_press(&timer, TITLE_MS) {
        debounce(&timer);
    }

    let mut scene = Scene::Blank;
    loop {
        scene.render(display.framebuffer_mut());
        _ = display.update();

        if wait_or_press(&timer, SCENE_MS) {
            debounce(&timer);
            run_animation(&mut display, &timer);
            debounce(&timer);
            draw_title(&mut display);
            if wait_or_press(&timer, TITLE_MS) {
                debounce(&timer);
            }
            scene = Scene::Blank;
            continue;
        }
        scene = scene.next();
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        if let Some(button) = BUTTON.borrow_ref_mut(cs).as_mut() {
            if button.interrupt_status(EdgeLow) {
                button.clear_interrupt(EdgeLow);
                BUTTON_PRESSED.borrow(cs).set(true);
            }
        }
    });
}
