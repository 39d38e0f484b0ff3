//! Built-in English/French string table

use std::collections::HashMap;

use deskmate_domain::Language;
use once_cell::sync::Lazy;

/// `key → [english, french]`
static ENTRIES: &[(&str, [&str; 2])] = &[
    // Shell
    ("appName", ["Deskmate", "Deskmate"]),
    ("dashboard", ["Dashboard", "Tableau de bord"]),
    ("home", ["Home", "Accueil"]),
    ("emails", ["Emails", "E-mails"]),
    ("tasks", ["Tasks", "Tâches"]),
    ("calendar", ["Calendar", "Calendrier"]),
    ("excel", ["Excel", "Excel"]),
    ("logs", ["Logs", "Journaux"]),
    ("success", ["Success", "Succès"]),
    ("error", ["Error", "Erreur"]),
    ("loading", ["Loading...", "Chargement..."]),
    ("edit", ["Edit", "Modifier"]),
    ("cancel", ["Cancel", "Annuler"]),
    // Dashboard
    ("unreadEmails", ["Unread emails", "E-mails non lus"]),
    ("upcomingEvents", ["Upcoming events", "Événements à venir"]),
    ("excelFiles", ["Excel files", "Fichiers Excel"]),
    ("quickActions", ["Quick actions", "Actions rapides"]),
    ("newMessage", ["New message", "Nouveau message"]),
    ("newTable", ["New table", "Nouveau tableau"]),
    ("schedule", ["Schedule", "Planifier"]),
    ("search", ["Search", "Rechercher"]),
    ("recentActivity", ["Recent activity", "Activité récente"]),
    // Emails
    ("emailInbox", ["Email inbox", "Boîte de réception"]),
    ("emailConfig", ["Email configuration", "Configuration e-mail"]),
    ("fetchEmails", ["Fetch emails", "Récupérer les e-mails"]),
    ("from", ["From", "De"]),
    ("summary", ["Summary", "Résumé"]),
    ("draftResponse", ["Draft response", "Brouillon de réponse"]),
    ("sendResponse", ["Send response", "Envoyer la réponse"]),
    ("imapServer", ["IMAP server", "Serveur IMAP"]),
    ("imapPort", ["IMAP port", "Port IMAP"]),
    ("smtpServer", ["SMTP server", "Serveur SMTP"]),
    ("smtpPort", ["SMTP port", "Port SMTP"]),
    ("email", ["Email", "E-mail"]),
    ("password", ["Password", "Mot de passe"]),
    ("saveConfig", ["Save configuration", "Enregistrer la configuration"]),
    // Tasks
    ("taskBoard", ["Task board", "Tableau des tâches"]),
    ("newTask", ["New task", "Nouvelle tâche"]),
    ("taskTitle", ["Title", "Titre"]),
    ("taskDescription", ["Description", "Description"]),
    ("taskType", ["Type", "Type"]),
    ("priority", ["Priority", "Priorité"]),
    ("low", ["Low", "Basse"]),
    ("medium", ["Medium", "Moyenne"]),
    ("high", ["High", "Haute"]),
    ("dueDate", ["Due date", "Échéance"]),
    ("createTask", ["Create task", "Créer la tâche"]),
    ("todo", ["To do", "À faire"]),
    ("inValidation", ["In validation", "En validation"]),
    ("done", ["Done", "Terminé"]),
    // Calendar
    ("calendarView", ["Calendar", "Calendrier"]),
    ("newEvent", ["New event", "Nouvel événement"]),
    ("eventTitle", ["Event title", "Titre de l'événement"]),
    ("eventDescription", ["Description", "Description"]),
    ("startTime", ["Start time", "Début"]),
    ("endTime", ["End time", "Fin"]),
    ("reminder", ["Reminder (minutes)", "Rappel (minutes)"]),
    ("createEvent", ["Create event", "Créer l'événement"]),
    // Files
    ("dataManagement", ["Data management", "Gestion des données"]),
    ("createNewFile", ["Create new file", "Créer un fichier"]),
    ("download", ["Download", "Télécharger"]),
    ("requestDescription", ["Request description", "Description de la demande"]),
    ("sampleData", ["Sample data (JSON)", "Données d'exemple (JSON)"]),
    ("generate", ["Generate", "Générer"]),
    // Logs
    ("activityLogs", ["Activity logs", "Journal d'activité"]),
    ("time", ["Time", "Heure"]),
    ("action", ["Action", "Action"]),
    ("details", ["Details", "Détails"]),
    ("status", ["Status", "Statut"]),
];

static CATALOG: Lazy<HashMap<&'static str, [&'static str; 2]>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Translation of `key`, if the catalog has one.
pub fn lookup(key: &str, language: Language) -> Option<&'static str> {
    let index = match language {
        Language::En => 0,
        Language::Fr => 1,
    };
    CATALOG.get(key).map(|pair| pair[index])
}

/// Every key the catalog knows, in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(key, _)| *key)
}
