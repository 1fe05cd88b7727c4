// User-facing texts shown by the controller and the backend client.

pub const BACKEND_ERROR: &str = "Error en el backend. Revisa la consola de Python.";
pub const BACKEND_UNREACHABLE: &str = "No se pudo conectar al backend (¿app.py está arrancado?).";
pub const EMPTY_REPLY: &str = "Sin respuesta.";

pub const BROWSE_FAILED: &str = "No pude acceder a esa URL.";
pub const BROWSE_UNREACHABLE: &str = "Error al navegar 🛑";
pub const PAGE_WITHOUT_CONTENT: &str = "No hay contenido legible en la página.";
pub const PAGE_EXCERPT_INTRO: &str = "He leído la página. Aquí tienes un fragmento:\n\n";

pub const AI_DISABLED: &str = "La IA está en modo apagado. Actívala arriba para conectar con OpenAI.";
pub const MEMORY_CLEARED: &str = "Memoria borrada 🧹. Podemos empezar de nuevo.";

// Meta annotations rendered under assistant-style messages
pub const META_BROWSER: &str = "Navegador";
pub const META_LOCAL: &str = "IA local";
pub const META_ERROR: &str = "Error";
pub const META_RESTORED: &str = "Recuperado";
pub const META_SYSTEM: &str = "Sistema";

/// Meta annotation for a successful model reply
pub fn model_meta(model: &str) -> String {
    format!("Modelo: {}", model)
}
