// Pattern 3: Singleton - Process-wide Logger with Double-Checked Locking
// Demonstrates lazy, thread-safe, one-time construction of a global service
// and the memory ordering that keeps the lock off the fast path.

use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};
use std::thread;

// ============================================================================
// Example: The Logger Service
// ============================================================================

// The only way to reach a Logger is Logger::instance(). The type is neither
// Clone nor Copy, so a second instance cannot be made by duplication.
struct Logger {
    id: usize,
}

// Uninitialized state is the null pointer; the transition to Initialized
// happens exactly once, under INIT_LOCK.
static INSTANCE: AtomicPtr<Logger> = AtomicPtr::new(ptr::null_mut());
static INIT_LOCK: Mutex<()> = Mutex::new(());
static CREATED: AtomicUsize = AtomicUsize::new(0);

impl Logger {
    fn instance() -> &'static Logger {
        // Fast path: no lock once initialized. Acquire pairs with the
        // release store below, so construction (including the counter
        // increment) is visible before the pointer is.
        let fast = INSTANCE.load(Ordering::Acquire);
        if !fast.is_null() {
            return unsafe { &*fast };
        }
        Self::instance_slow()
    }

    fn instance_slow() -> &'static Logger {
        let _guard = INIT_LOCK.lock().unwrap();

        // Re-check under the lock: another thread may have won the race
        // between our fast-path load and the lock acquisition.
        let existing = INSTANCE.load(Ordering::Acquire);
        if !existing.is_null() {
            return unsafe { &*existing };
        }

        let logger = Box::new(Logger {
            id: CREATED.fetch_add(1, Ordering::Relaxed) + 1,
        });
        println!("New instance created {}", logger.id);

        // The instance lives until process exit; leaking the Box is the
        // intended lifecycle (no de-initialization transition).
        let instance = Box::into_raw(logger);
        INSTANCE.store(instance, Ordering::Release);
        unsafe { &*instance }
    }

    // Stateless after construction; callable from any number of threads
    // with no extra synchronization.
    fn log(&self, msg: &str) {
        println!("{}", msg);
    }
}

// How many times the constructor ran: 1 forever after first access.
fn creation_count() -> usize {
    CREATED.load(Ordering::Acquire)
}

// ============================================================================
// Example: Two Threads Race to Initialize
// ============================================================================

// Simulated users. Whichever thread loses the construction race blocks
// briefly on INIT_LOCK, then observes the winner's instance.
fn user1_log() {
    let logger = Logger::instance();
    logger.log("User1 logged");
}

fn user2_log() {
    let logger = Logger::instance();
    logger.log("User2 logged");
}

fn two_thread_example() {
    let t1 = thread::spawn(user1_log);
    let t2 = thread::spawn(user2_log);

    // Unconditional, blocking joins.
    t1.join().unwrap();
    t2.join().unwrap();

    println!("Instances constructed: {}", creation_count());

    // let copied = *Logger::instance(); // Compile error: Logger is not Copy
}

// ============================================================================
// Example: Singleton with OnceLock
// ============================================================================

// The std primitive packages the same guarded one-time initialization.
struct Settings {
    app_name: String,
    debug_mode: bool,
}

impl Settings {
    fn global() -> &'static Settings {
        static SETTINGS: OnceLock<Settings> = OnceLock::new();
        SETTINGS.get_or_init(|| Settings {
            app_name: std::env::var("APP_NAME").unwrap_or_else(|_| "pattern-demos".to_string()),
            debug_mode: cfg!(debug_assertions),
        })
    }
}

fn once_lock_example() {
    let settings = Settings::global();
    println!("Settings singleton:");
    println!("  app_name: {}", settings.app_name);
    println!("  debug_mode: {}", settings.debug_mode);
    println!("  Same instance: {}", ptr::eq(settings, Settings::global()));
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 3: Singleton");
    println!("====================\n");

    println!("=== Two Threads, One Logger ===");
    two_thread_example();
    println!();

    println!("=== Singleton with OnceLock ===");
    once_lock_example();
}
